use serde::{Deserialize, Serialize};

use crate::core::scale::{AxisTick, ValueScale};
use crate::core::types::{Canvas, DataPoint};
use crate::render::Path;

/// Mapped line vertex together with the sample it represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Deterministic geometry for a line chart.
///
/// `area_path` repeats `polyline_path` and closes it against the baseline
/// under the last and first points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub points: Vec<LinePoint>,
    pub polyline_path: Path,
    pub area_path: Path,
    pub y_ticks: Vec<AxisTick>,
}

/// Lays out samples evenly across the inner width, first at the left edge
/// and last at the right edge. A single sample is centered.
#[must_use]
pub fn layout_line(series: &[DataPoint], canvas: Canvas) -> LineGeometry {
    let inner = canvas.inner();
    let scale = ValueScale::from_series(series, inner);
    let y_ticks = scale.ticks();

    let count = series.len();
    let step_x = if count > 1 {
        inner.width / (count - 1) as f64
    } else {
        0.0
    };

    let points: Vec<LinePoint> = series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let offset = if count == 1 {
                inner.width / 2.0
            } else {
                i as f64 * step_x
            };
            LinePoint {
                x: inner.x + offset,
                y: scale.value_to_y(point.value),
                name: point.name.clone(),
                value: point.value,
                color: point.color.clone(),
            }
        })
        .collect();

    if points.is_empty() {
        return LineGeometry {
            points,
            polyline_path: Path::new(),
            area_path: Path::new(),
            y_ticks,
        };
    }
    let first = &points[0];
    let last = &points[points.len() - 1];

    let mut polyline_path = Path::new();
    polyline_path.move_to(first.x, first.y);
    for point in &points[1..] {
        polyline_path.line_to(point.x, point.y);
    }

    let baseline_y = inner.baseline_y();
    let mut area_path = polyline_path.clone();
    area_path
        .line_to(last.x, baseline_y)
        .line_to(first.x, baseline_y)
        .close();

    LineGeometry {
        points,
        polyline_path,
        area_path,
        y_ticks,
    }
}

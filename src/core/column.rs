use serde::{Deserialize, Serialize};

use crate::core::scale::{AxisTick, ValueScale};
use crate::core::types::{Canvas, DataPoint};

/// Share of the inner width reserved for gaps between and around bars.
pub const COLUMN_GAP_RATIO: f64 = 0.4;

/// Bar rectangle in pixel coordinates plus the sample it represents.
///
/// `height` is signed: negative samples yield a negative height whose
/// rectangle hangs below the baseline. Use [`ColumnBar::rect`] for a
/// normalized rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl ColumnBar {
    /// Returns `(x, y, width, height)` with a non-negative height.
    #[must_use]
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        if self.height >= 0.0 {
            (self.x, self.y, self.width, self.height)
        } else {
            (self.x, self.y + self.height, self.width, -self.height)
        }
    }
}

/// Deterministic geometry for a column chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub bars: Vec<ColumnBar>,
    pub y_ticks: Vec<AxisTick>,
}

/// Lays out one bar per sample across the inner rectangle.
///
/// `COLUMN_GAP_RATIO` of the inner width is split into `n + 1` equal gaps
/// around `n` equal-width bars; bars grow upward from the baseline.
#[must_use]
pub fn layout_columns(series: &[DataPoint], canvas: Canvas) -> ColumnGeometry {
    let inner = canvas.inner();
    let scale = ValueScale::from_series(series, inner);
    let y_ticks = scale.ticks();

    if series.is_empty() {
        return ColumnGeometry {
            bars: Vec::new(),
            y_ticks,
        };
    }

    let count = series.len() as f64;
    let total_gap = inner.width * COLUMN_GAP_RATIO;
    let bar_width = (inner.width - total_gap) / count;
    let gap = total_gap / (count + 1.0);

    let bars = series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = scale.value_to_height(point.value);
            ColumnBar {
                x: inner.x + gap + i as f64 * (bar_width + gap),
                y: inner.baseline_y() - height,
                width: bar_width,
                height,
                name: point.name.clone(),
                value: point.value,
                color: point.color.clone(),
            }
        })
        .collect();

    ColumnGeometry { bars, y_ticks }
}

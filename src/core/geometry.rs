use serde::{Deserialize, Serialize};

use crate::core::column::{ColumnGeometry, layout_columns};
use crate::core::line::{LineGeometry, layout_line};
use crate::core::pie::{PieFrame, PieGeometry, layout_pie};
use crate::core::scale::AxisTick;
use crate::core::types::{Canvas, ChartKind, ChartSpec};
use crate::error::{ChartError, ChartResult};

/// Computed geometry for one chart, one variant per chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartGeometry {
    Line(LineGeometry),
    Column(ColumnGeometry),
    Pie(PieGeometry),
}

impl ChartGeometry {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line(_) => ChartKind::Line,
            Self::Column(_) => ChartKind::Column,
            Self::Pie(_) => ChartKind::Pie,
        }
    }

    /// Value-axis ticks, `None` for pie charts.
    #[must_use]
    pub fn y_ticks(&self) -> Option<&[AxisTick]> {
        match self {
            Self::Line(line) => Some(&line.y_ticks),
            Self::Column(column) => Some(&column.y_ticks),
            Self::Pie(_) => None,
        }
    }

    /// Number of highlightable elements (points, bars or slices).
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            Self::Line(line) => line.points.len(),
            Self::Column(column) => column.bars.len(),
            Self::Pie(pie) => pie.slices.len(),
        }
    }

    /// Rejects geometry carrying non-finite coordinates or malformed paths.
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(ticks) = self.y_ticks() {
            ensure_finite(ticks.iter().map(|tick| tick.y), "tick")?;
        }
        match self {
            Self::Line(line) => {
                ensure_finite(
                    line.points.iter().flat_map(|point| [point.x, point.y]),
                    "line point",
                )?;
                line.polyline_path.validate()?;
                line.area_path.validate()
            }
            Self::Column(column) => ensure_finite(
                column
                    .bars
                    .iter()
                    .flat_map(|bar| [bar.x, bar.y, bar.width, bar.height]),
                "column bar",
            ),
            Self::Pie(pie) => {
                ensure_finite(
                    pie.slices
                        .iter()
                        .flat_map(|slice| [slice.percent, slice.label_x, slice.label_y]),
                    "pie slice",
                )?;
                for slice in &pie.slices {
                    slice.path.validate()?;
                }
                Ok(())
            }
        }
    }
}

fn ensure_finite(values: impl IntoIterator<Item = f64>, what: &str) -> ChartResult<()> {
    if values.into_iter().all(f64::is_finite) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

/// Runs the layout selected by `spec.kind`.
///
/// Pure and deterministic: the same spec and frame always produce the same
/// geometry, and nothing outside the arguments is read.
#[must_use]
pub fn compute_geometry(spec: &ChartSpec, canvas: Canvas, pie_frame: PieFrame) -> ChartGeometry {
    match spec.kind {
        ChartKind::Line => ChartGeometry::Line(layout_line(&spec.series, canvas)),
        ChartKind::Column => ChartGeometry::Column(layout_columns(&spec.series, canvas)),
        ChartKind::Pie => ChartGeometry::Pie(layout_pie(&spec.series, pie_frame)),
    }
}

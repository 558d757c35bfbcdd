use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{ChartKind, ChartSpec, DataPoint};

/// Color used when a row arrives without one.
pub const DEFAULT_SERIES_COLOR: &str = "#2563eb";

/// Title used when the caller leaves it blank.
pub const DEFAULT_CHART_TITLE: &str = "My Chart";

/// Palette cycled through when hosts add new rows.
pub const SERIES_PALETTE: [&str; 6] = [
    "#2563eb", "#16a34a", "#f97316", "#dc2626", "#7c3aed", "#0891b2",
];

/// Raw, possibly incomplete series entry as typed in by a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesRow {
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

impl SeriesRow {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<f64>, color: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color,
        }
    }

    /// Empty row pre-colored with the palette entry for `index`.
    #[must_use]
    pub fn blank(index: usize) -> Self {
        Self {
            name: String::new(),
            value: None,
            color: Some(default_row_color(index).to_owned()),
        }
    }

    fn into_point(self) -> Option<DataPoint> {
        if self.name.trim().is_empty() {
            return None;
        }
        let value = self.value.filter(|value| value.is_finite())?;
        let color = self
            .color
            .filter(|color| !color.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERIES_COLOR.to_owned());
        Some(DataPoint {
            name: self.name,
            value,
            color,
        })
    }
}

#[must_use]
pub fn default_row_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Drops rows with a blank name or a missing/non-finite value and fills in
/// missing colors. Kept rows preserve their order and untrimmed names.
#[must_use]
pub fn sanitize_rows(rows: Vec<SeriesRow>) -> Vec<DataPoint> {
    let original_count = rows.len();
    let points: Vec<DataPoint> = rows.into_iter().filter_map(SeriesRow::into_point).collect();
    debug!(
        original_count,
        kept_count = points.len(),
        "sanitized series rows"
    );
    points
}

impl ChartSpec {
    /// Builds a spec from raw rows, filtering out anything the layout stage
    /// must never see.
    #[must_use]
    pub fn from_rows(kind: ChartKind, title: &str, rows: Vec<SeriesRow>) -> Self {
        let title = if title.trim().is_empty() {
            DEFAULT_CHART_TITLE
        } else {
            title
        };
        Self::new(kind, title, sanitize_rows(rows))
    }
}

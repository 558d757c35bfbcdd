use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Chart family selecting the layout algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Column,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Column, ChartKind::Pie];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Column => "column",
            Self::Pie => "pie",
        }
    }

    /// Column and line charts share the value axis and its ticks.
    #[must_use]
    pub const fn has_value_axis(self) -> bool {
        matches!(self, Self::Line | Self::Column)
    }
}

/// One named sample of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }

    pub fn from_decimal(
        name: impl Into<String>,
        value: Decimal,
        color: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self {
            name: name.into(),
            value: decimal_to_f64(value, "value")?,
            color: color.into(),
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.value.is_finite()
    }
}

/// Validated render request: one chart kind, a title and an ordered series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<DataPoint>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>, series: Vec<DataPoint>) -> Self {
        Self {
            kind,
            title: title.into(),
            series,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Checks the series invariant the layout stage relies on.
    pub fn validate(&self) -> ChartResult<()> {
        for (index, point) in self.series.iter().enumerate() {
            if point.name.trim().is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "series[{index}] name must not be blank"
                )));
            }
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series[{index}] value must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Margins between the canvas edge and the inner plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 50.0)
    }
}

/// Fixed drawing surface for axis-based charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 320.0,
            padding: Padding::default(),
        }
    }
}

impl Canvas {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: Padding) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    #[must_use]
    pub fn inner(self) -> InnerRect {
        InnerRect {
            x: self.padding.left,
            y: self.padding.top,
            width: self.width - self.padding.left - self.padding.right,
            height: self.height - self.padding.top - self.padding.bottom,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let inner = self.inner();
        inner.x.is_finite()
            && inner.y.is_finite()
            && inner.width.is_finite()
            && inner.height.is_finite()
            && inner.width > 0.0
            && inner.height > 0.0
    }
}

/// Plot rectangle left after padding; `y + height` is the value baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InnerRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl InnerRect {
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }
}

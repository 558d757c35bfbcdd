use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::format::format_value;
use crate::core::types::{DataPoint, InnerRect};

/// Axis maximum used when the data maximum is zero, negative or missing.
pub const FALLBACK_NICE_MAX: f64 = 10.0;

/// Largest `{1, 2, 5, 10} * 10^k` value representable as a finite `f64`.
///
/// Data maxima above it cannot be rounded up to a nice value without
/// overflowing, so [`nice_max`] saturates to `f64::MAX` for them.
pub const LARGEST_NICE_MAX: f64 = 1e308;

/// Number of intervals between value-axis ticks (ticks = intervals + 1).
pub const TICK_INTERVALS: usize = 5;

const NICE_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Rounds a data maximum up to `{1, 2, 5, 10} * 10^k`.
///
/// Non-positive and non-finite inputs fall back to [`FALLBACK_NICE_MAX`].
/// Inputs above [`LARGEST_NICE_MAX`] saturate to `f64::MAX`. The result is
/// always finite.
#[must_use]
pub fn nice_max(max_value: f64) -> f64 {
    if !max_value.is_finite() || max_value <= 0.0 {
        return FALLBACK_NICE_MAX;
    }
    if max_value > LARGEST_NICE_MAX {
        return f64::MAX;
    }

    let mut magnitude = 10f64.powf(max_value.log10().floor());
    // log10 can land one decade off near exact powers of ten.
    if max_value / magnitude >= 10.0 {
        magnitude *= 10.0;
    } else if max_value / magnitude < 1.0 {
        magnitude /= 10.0;
    }
    let normalized = max_value / magnitude;

    let step = NICE_STEPS
        .iter()
        .copied()
        .find(|&step| normalized <= step)
        .unwrap_or(10.0);
    let nice = step * magnitude;
    if !nice.is_finite() {
        return LARGEST_NICE_MAX;
    }
    if nice >= max_value {
        return nice;
    }

    // Rounding in `normalized` let a too-small step through; take the next one.
    let next = match step {
        s if s < 2.0 => 2.0,
        s if s < 5.0 => 5.0,
        s if s < 10.0 => 10.0,
        _ => 20.0,
    };
    let nice = next * magnitude;
    if nice.is_finite() {
        nice
    } else {
        LARGEST_NICE_MAX
    }
}

/// Largest value of the series, or `None` when it is empty.
#[must_use]
pub fn series_max(series: &[DataPoint]) -> Option<f64> {
    series
        .iter()
        .map(|point| OrderedFloat(point.value))
        .max()
        .map(|max| max.0)
}

/// One value-axis reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Linear value-to-pixel mapping shared by column and line charts.
///
/// `0` maps to the inner baseline and `niced_max` to the inner top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    niced_max: f64,
    inner: InnerRect,
}

impl ValueScale {
    #[must_use]
    pub fn new(max_value: f64, inner: InnerRect) -> Self {
        Self {
            niced_max: nice_max(max_value),
            inner,
        }
    }

    #[must_use]
    pub fn from_series(series: &[DataPoint], inner: InnerRect) -> Self {
        Self::new(series_max(series).unwrap_or(0.0), inner)
    }

    #[must_use]
    pub fn niced_max(self) -> f64 {
        self.niced_max
    }

    #[must_use]
    pub fn inner(self) -> InnerRect {
        self.inner
    }

    /// Pixel height of a bar or offset for `value`, signed like `value`.
    #[must_use]
    pub fn value_to_height(self, value: f64) -> f64 {
        value / self.niced_max * self.inner.height
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.inner.baseline_y() - self.value_to_height(value)
    }

    #[must_use]
    pub fn ticks(self) -> Vec<AxisTick> {
        y_ticks(self)
    }
}

/// Builds the value-axis ticks: `TICK_INTERVALS + 1` evenly spaced values
/// from `0` to the niced maximum, inclusive.
#[must_use]
pub fn y_ticks(scale: ValueScale) -> Vec<AxisTick> {
    (0..=TICK_INTERVALS)
        .map(|i| {
            // Divide first so the top of the f64 range cannot overflow.
            let value = if i == TICK_INTERVALS {
                scale.niced_max
            } else {
                scale.niced_max / TICK_INTERVALS as f64 * i as f64
            };
            AxisTick {
                value,
                y: scale.value_to_y(value),
                label: format_value(value),
            }
        })
        .collect()
}

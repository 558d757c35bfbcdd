use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Returns `true` when `value` has no fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{decimal_to_f64, is_integral};

    #[test]
    fn decimal_converts_exactly_for_short_fractions() {
        let value = decimal_to_f64(Decimal::new(1250, 2), "value").expect("convert");
        assert_eq!(value, 12.5);
    }

    #[test]
    fn integral_check_ignores_non_finite() {
        assert!(is_integral(-3.0));
        assert!(!is_integral(3.5));
        assert!(!is_integral(f64::INFINITY));
    }
}

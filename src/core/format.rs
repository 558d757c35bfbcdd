use crate::core::primitives::is_integral;

/// Formats an axis tick value with a compact `K`/`M` suffix.
///
/// Suffixed values always keep one decimal (`1000 -> "1.0K"`), integral values
/// print without a fraction and everything else keeps one decimal.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{:.1}M", value / 1_000_000.0);
    }
    if value >= 1_000.0 {
        return format!("{:.1}K", value / 1_000.0);
    }
    if is_integral(value) {
        return format!("{value:.0}");
    }
    format!("{value:.1}")
}

/// Formats a `0..=1` fraction as a percentage with one decimal.
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

//! Formatting helpers for presenting aggregates.

/// Percent with two decimals, e.g. `50.00 %`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2} %")
}

pub fn format_count(value: u64) -> String {
    value.to_string()
}

/// Two-digit hour label for axis ticks.
pub fn format_hour(hour: u8) -> String {
    format!("{hour:02}")
}

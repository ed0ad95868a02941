//! Formatting helpers for presenting service values.

/// Render a numeric value the way the service sent it: `f64` display drops
/// the fractional part only when there is none.
pub fn number(value: f64) -> String {
    format!("{value}")
}

/// Summary amount, or the placeholder when the service omitted the field.
/// A present zero is a value, not an omission.
pub fn amount_or_na(value: Option<f64>) -> String {
    value.map(number).unwrap_or_else(|| "N/A".to_string())
}

/// Summary count, or the placeholder when the service omitted the field.
pub fn count_or_na(value: Option<u64>) -> String {
    value
        .map(|count| count.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

//! Polars AnyValue utility functions.

use polars::prelude::AnyValue;

/// Converts a cell of an all-string frame to text; Null becomes empty.
pub(crate) fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub(crate) fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub(crate) fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_numeric(3.0), "3");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(10.0), "10");
    }

    #[test]
    fn null_becomes_empty_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::String("Kirchensaal")), "Kirchensaal");
    }

    #[test]
    fn parse_f64_rejects_blank() {
        assert_eq!(parse_f64(" 2.5 "), Some(2.5));
        assert_eq!(parse_f64("   "), None);
        assert_eq!(parse_f64("zwei"), None);
    }
}

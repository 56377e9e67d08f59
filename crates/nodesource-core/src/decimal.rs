//! Decimal text helpers
//!
//! Values travel as text. Served values always carry a decimal point and
//! never use exponent notation; consumers get a lenient parser for text that
//! arrives quoted or with thousands separators.

use crate::{CoreError, Result};

/// Render a float as plain decimal text, e.g. `50.0` or `12.345`
pub fn format_decimal(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Clean up decimal text received from an upstream endpoint
///
/// Removes double quotes, surrounding whitespace and commas, and keeps only
/// the first decimal point.
pub fn sanitize_decimal(input: &str) -> String {
    let cleaned: String = input
        .replace('"', "")
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.split_once('.') {
        Some((whole, fraction)) if fraction.contains('.') => {
            format!("{}.{}", whole, fraction.replace('.', ""))
        }
        _ => cleaned,
    }
}

/// Parse decimal text, retrying once on the sanitized form
pub fn parse_decimal(input: &str) -> Result<f64> {
    if let Ok(value) = input.trim().parse::<f64>() {
        if value.is_finite() {
            return Ok(value);
        }
    }

    sanitize_decimal(input)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoreError::InvalidDecimal(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal_keeps_point() {
        assert_eq!(format_decimal(50.0), "50.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(12.345), "12.345");
        assert_eq!(format_decimal(1e-7), "0.0000001");
    }

    #[test]
    fn test_sanitize_decimal() {
        assert_eq!(sanitize_decimal("\"42.5\""), "42.5");
        assert_eq!(sanitize_decimal("  1,234.5 \n"), "1234.5");
        assert_eq!(sanitize_decimal("1.2.3"), "1.23");
        assert_eq!(sanitize_decimal("7"), "7");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("3.25").unwrap(), 3.25);
        assert_eq!(parse_decimal(" 3.25\n").unwrap(), 3.25);
        assert_eq!(parse_decimal("\"1,000.5\"").unwrap(), 1000.5);
        assert!(matches!(
            parse_decimal("abc"),
            Err(CoreError::InvalidDecimal(_))
        ));
        assert!(parse_decimal("NaN").is_err());
        assert!(parse_decimal("").is_err());
    }
}

//! Shared utilities for the analysis engine.
//!
//! Common helpers used across the profiler and classifier to keep the
//! treatment of missing markers, boolean words, and value rendering
//! consistent.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is an integer type.
#[inline]
pub fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Check if a DataType is a float type.
#[inline]
pub fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || is_float_dtype(dtype)
}

/// Check if a DataType is a date or time type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    )
}

// =============================================================================
// Missing Value Detection
// =============================================================================

/// Textual markers treated as missing values in string columns.
pub const MISSING_MARKERS: [&str; 6] = ["n/a", "na", "null", "nan", "none", "missing"];

/// Check if a string value is a missing-value marker.
///
/// Empty and whitespace-only strings count as missing, as do the
/// conventional textual markers (case-insensitive).
pub fn is_missing_marker(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_ascii_lowercase();
    MISSING_MARKERS.iter().any(|&marker| lower == marker)
}

// =============================================================================
// String Parsing Utilities
// =============================================================================

const BOOLEAN_TRUE: [&str; 5] = ["true", "t", "yes", "y", "1"];
const BOOLEAN_FALSE: [&str; 5] = ["false", "f", "no", "n", "0"];

/// Check if a string reads as boolean true.
pub fn is_boolean_true(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    BOOLEAN_TRUE.iter().any(|&v| lower == v)
}

/// Check if a string reads as boolean false.
pub fn is_boolean_false(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    BOOLEAN_FALSE.iter().any(|&v| lower == v)
}

/// Check if a string is a boolean representation (true/false, yes/no, 0/1).
pub fn is_boolean_string(s: &str) -> bool {
    is_boolean_true(s) || is_boolean_false(s)
}

/// Check if a string parses as a whole number.
pub fn is_integer_string(s: &str) -> bool {
    s.trim().parse::<i64>().is_ok()
}

/// Check if a string parses as a floating point number.
///
/// NaN spellings are excluded; they are treated as missing, not numeric.
pub fn is_float_string(s: &str) -> bool {
    matches!(s.trim().parse::<f64>(), Ok(v) if !v.is_nan())
}

/// Try to parse a string as f64, rejecting NaN.
pub fn parse_float_string(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

// =============================================================================
// Value Rendering
// =============================================================================

/// Render a cell value for samples and uniqueness bookkeeping.
///
/// String values render without the quotes the polars Display impl adds.
pub fn render_any_value(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => format!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integer_dtype() {
        assert!(is_integer_dtype(&DataType::Int64));
        assert!(is_integer_dtype(&DataType::UInt8));
        assert!(!is_integer_dtype(&DataType::Float64));
        assert!(!is_integer_dtype(&DataType::String));
    }

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int32));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_is_datetime_dtype() {
        assert!(is_datetime_dtype(&DataType::Date));
        assert!(!is_datetime_dtype(&DataType::Int64));
    }

    #[test]
    fn test_is_missing_marker() {
        assert!(is_missing_marker(""));
        assert!(is_missing_marker("   "));
        assert!(is_missing_marker("N/A"));
        assert!(is_missing_marker("null"));
        assert!(is_missing_marker("NaN"));
        assert!(!is_missing_marker("42"));
        assert!(!is_missing_marker("alice"));
    }

    #[test]
    fn test_is_boolean_string() {
        assert!(is_boolean_string("true"));
        assert!(is_boolean_string("FALSE"));
        assert!(is_boolean_string("yes"));
        assert!(is_boolean_string("0"));
        assert!(!is_boolean_string("maybe"));
        assert!(!is_boolean_string("42"));
    }

    #[test]
    fn test_is_integer_string() {
        assert!(is_integer_string("42"));
        assert!(is_integer_string("-7"));
        assert!(is_integer_string(" 100 "));
        assert!(!is_integer_string("1.5"));
        assert!(!is_integer_string("abc"));
    }

    #[test]
    fn test_is_float_string() {
        assert!(is_float_string("1.5"));
        assert!(is_float_string("-0.25"));
        assert!(is_float_string("42"));
        assert!(!is_float_string("NaN"));
        assert!(!is_float_string("abc"));
    }

    #[test]
    fn test_render_any_value_strips_string_quotes() {
        let series = Series::new("s".into(), &["hello"]);
        let value = series.get(0).unwrap();
        assert_eq!(render_any_value(&value), "hello");

        let nums = Series::new("n".into(), &[42i64]);
        let value = nums.get(0).unwrap();
        assert_eq!(render_any_value(&value), "42");
    }
}

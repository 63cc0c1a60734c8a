//! Type inference logic for column profiling.
//!
//! Native polars dtypes short-circuit; string columns are inferred from
//! their non-missing values with a fixed precedence: integer before
//! float, then boolean, then datetime, then string.

use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

use crate::types::Dtype;
use crate::utils::{
    is_boolean_string, is_datetime_dtype, is_float_dtype, is_float_string, is_integer_dtype,
    is_integer_string,
};

// Date pattern regexes - compiled once at startup
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}[-/]\d{1,2}[-/]\d{1,2}$").expect("Invalid regex: YYYY-MM-DD"),
        Regex::new(r"^\d{1,2}[-/]\d{1,2}[-/]\d{4}$").expect("Invalid regex: MM-DD-YYYY"),
        Regex::new(r"^\d{4}-\d{2}-\d{2}\s\d{2}:\d{2}:\d{2}").expect("Invalid regex: datetime"),
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("Invalid regex: ISO"),
    ]
});

/// Check if a string value matches any supported date pattern.
pub(crate) fn is_date_like(value: &str) -> bool {
    let trimmed = value.trim();
    DATE_PATTERNS.iter().any(|p| p.is_match(trimmed))
}

/// Infer the dtype of a column from its polars dtype and extracted values.
///
/// `text_values` holds the non-missing values of string columns;
/// `numeric_values` holds the non-missing values of native numeric
/// columns. A column with no non-missing values is `Unknown`.
pub(crate) fn infer_dtype(
    dtype: &DataType,
    text_values: &[String],
    numeric_values: &[f64],
    non_missing: usize,
) -> Dtype {
    if non_missing == 0 {
        return Dtype::Unknown;
    }

    if is_integer_dtype(dtype) {
        return Dtype::Integer;
    }

    if is_float_dtype(dtype) {
        // Float storage with only whole values reads as integer data.
        return if numeric_values.iter().all(|v| v.fract() == 0.0) {
            Dtype::Integer
        } else {
            Dtype::Float
        };
    }

    if dtype == &DataType::Boolean {
        return Dtype::Boolean;
    }

    if is_datetime_dtype(dtype) {
        return Dtype::Datetime;
    }

    if dtype == &DataType::String {
        return infer_string_dtype(text_values);
    }

    // Unsupported storage types fall back to string profiling.
    Dtype::String
}

/// Infer the dtype of a string column from its non-missing values.
///
/// First matching type wins: integer, float, boolean, datetime, string.
/// Every value must satisfy the check for the type to match.
pub(crate) fn infer_string_dtype(values: &[String]) -> Dtype {
    if values.is_empty() {
        return Dtype::Unknown;
    }

    if values.iter().all(|v| is_integer_string(v)) {
        return Dtype::Integer;
    }

    if values.iter().all(|v| is_float_string(v)) {
        return Dtype::Float;
    }

    if values.iter().all(|v| is_boolean_string(v)) {
        return Dtype::Boolean;
    }

    if values.iter().all(|v| is_date_like(v)) {
        return Dtype::Datetime;
    }

    Dtype::String
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    // ==================== infer_string_dtype tests ====================

    #[test]
    fn test_string_dtype_integers() {
        assert_eq!(
            infer_string_dtype(&strings(&["100", "200", "-5"])),
            Dtype::Integer
        );
    }

    #[test]
    fn test_string_dtype_floats() {
        assert_eq!(
            infer_string_dtype(&strings(&["1.5", "2.0", "3.25"])),
            Dtype::Float
        );
    }

    #[test]
    fn test_string_dtype_integer_beats_float() {
        // Whole numbers parse as both; integer wins by precedence.
        assert_eq!(infer_string_dtype(&strings(&["1", "2", "3"])), Dtype::Integer);
    }

    #[test]
    fn test_string_dtype_boolean() {
        assert_eq!(
            infer_string_dtype(&strings(&["yes", "no", "yes"])),
            Dtype::Boolean
        );
        assert_eq!(
            infer_string_dtype(&strings(&["true", "FALSE"])),
            Dtype::Boolean
        );
    }

    #[test]
    fn test_string_dtype_zero_one_is_integer() {
        // "0"/"1" could read as booleans but integer parsing wins first.
        assert_eq!(infer_string_dtype(&strings(&["0", "1", "1"])), Dtype::Integer);
    }

    #[test]
    fn test_string_dtype_datetime_iso() {
        assert_eq!(
            infer_string_dtype(&strings(&["2024-01-15", "2024-02-20"])),
            Dtype::Datetime
        );
    }

    #[test]
    fn test_string_dtype_datetime_with_time() {
        assert_eq!(
            infer_string_dtype(&strings(&["2024-01-15T10:30:00", "2024-02-20 14:45:00"])),
            Dtype::Datetime
        );
    }

    #[test]
    fn test_string_dtype_plain_text() {
        assert_eq!(
            infer_string_dtype(&strings(&["red", "blue", "green"])),
            Dtype::String
        );
    }

    #[test]
    fn test_string_dtype_mixed_is_string() {
        // One non-numeric value forces the column to string.
        assert_eq!(
            infer_string_dtype(&strings(&["1", "2", "oops"])),
            Dtype::String
        );
    }

    #[test]
    fn test_string_dtype_empty_is_unknown() {
        assert_eq!(infer_string_dtype(&[]), Dtype::Unknown);
    }

    // ==================== infer_dtype tests ====================

    #[test]
    fn test_infer_native_integer() {
        assert_eq!(infer_dtype(&DataType::Int64, &[], &[1.0, 2.0], 2), Dtype::Integer);
    }

    #[test]
    fn test_infer_float_with_whole_values_is_integer() {
        assert_eq!(
            infer_dtype(&DataType::Float64, &[], &[1.0, 2.0, 3.0], 3),
            Dtype::Integer
        );
    }

    #[test]
    fn test_infer_float_with_fractional_values() {
        assert_eq!(
            infer_dtype(&DataType::Float64, &[], &[1.5, 2.0], 2),
            Dtype::Float
        );
    }

    #[test]
    fn test_infer_native_boolean() {
        assert_eq!(infer_dtype(&DataType::Boolean, &[], &[], 3), Dtype::Boolean);
    }

    #[test]
    fn test_infer_native_date() {
        assert_eq!(infer_dtype(&DataType::Date, &[], &[], 3), Dtype::Datetime);
    }

    #[test]
    fn test_infer_all_missing_is_unknown() {
        assert_eq!(infer_dtype(&DataType::String, &[], &[], 0), Dtype::Unknown);
    }

    #[test]
    fn test_is_date_like() {
        assert!(is_date_like("2024-01-15"));
        assert!(is_date_like("01/15/2024"));
        assert!(is_date_like("2024-01-15 10:30:00"));
        assert!(!is_date_like("not a date"));
        assert!(!is_date_like("1705312200"));
    }
}

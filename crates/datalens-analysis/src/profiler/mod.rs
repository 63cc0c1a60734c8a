//! Column profiling for dataset analysis.
//!
//! This module computes the per-column statistics everything downstream
//! consumes: inferred dtype, cardinality, missingness, Tukey outliers,
//! case consistency, and a fixed-size display sample.

mod statistics;
mod type_inference;

use std::collections::HashSet;

use polars::prelude::*;
use tracing::warn;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::types::{ColumnProfile, Dtype};
use crate::utils::{is_missing_marker, is_numeric_dtype, parse_float_string, render_any_value};

pub(crate) use statistics::{case_consistency_score, count_outliers};
pub(crate) use type_inference::infer_dtype;

/// Raw per-column material extracted in one pass over the values.
struct ColumnView {
    non_missing: usize,
    missing_count: usize,
    unique_count: usize,
    /// Non-missing values of string columns, trimmed.
    text_values: Vec<String>,
    /// Non-missing, non-NaN values of numeric columns.
    numeric_values: Vec<f64>,
    /// First values in row order, rendered for display.
    samples: Vec<String>,
}

impl ColumnView {
    fn extract(series: &Series, sample_size: usize) -> Result<Self> {
        let dtype = series.dtype().clone();

        if is_numeric_dtype(&dtype) {
            Self::extract_numeric(series, sample_size)
        } else if dtype == DataType::Boolean {
            Self::extract_boolean(series, sample_size)
        } else if dtype == DataType::String {
            Self::extract_string(series, sample_size)
        } else {
            // Datetime and any unsupported storage types go through the
            // rendered-value path.
            Self::extract_rendered(series, sample_size)
        }
    }

    fn extract_numeric(series: &Series, sample_size: usize) -> Result<Self> {
        let cast = series.cast(&DataType::Float64)?;
        let values = cast.f64()?;

        let mut missing_count = 0;
        let mut numeric_values = Vec::new();
        let mut unique = HashSet::new();
        let mut samples = Vec::new();

        for (idx, value) in values.into_iter().enumerate() {
            match value {
                None => missing_count += 1,
                Some(v) if v.is_nan() => missing_count += 1,
                Some(v) => {
                    numeric_values.push(v);
                    unique.insert(v.to_bits());
                    if samples.len() < sample_size {
                        samples.push(render_any_value(&series.get(idx)?));
                    }
                }
            }
        }

        Ok(Self {
            non_missing: numeric_values.len(),
            missing_count,
            unique_count: unique.len(),
            text_values: Vec::new(),
            numeric_values,
            samples,
        })
    }

    fn extract_boolean(series: &Series, sample_size: usize) -> Result<Self> {
        let values = series.bool()?;

        let mut missing_count = 0;
        let mut non_missing = 0;
        let mut seen_true = false;
        let mut seen_false = false;
        let mut samples = Vec::new();

        for value in values {
            match value {
                None => missing_count += 1,
                Some(v) => {
                    non_missing += 1;
                    if v {
                        seen_true = true;
                    } else {
                        seen_false = true;
                    }
                    if samples.len() < sample_size {
                        samples.push(v.to_string());
                    }
                }
            }
        }

        Ok(Self {
            non_missing,
            missing_count,
            unique_count: usize::from(seen_true) + usize::from(seen_false),
            text_values: Vec::new(),
            numeric_values: Vec::new(),
            samples,
        })
    }

    fn extract_string(series: &Series, sample_size: usize) -> Result<Self> {
        let values = series.str()?;

        let mut missing_count = 0;
        let mut text_values = Vec::new();
        let mut unique = HashSet::new();
        let mut samples = Vec::new();

        for value in values {
            match value {
                None => missing_count += 1,
                Some(v) if is_missing_marker(v) => missing_count += 1,
                Some(v) => {
                    let trimmed = v.trim();
                    unique.insert(trimmed.to_string());
                    if samples.len() < sample_size {
                        samples.push(v.to_string());
                    }
                    text_values.push(trimmed.to_string());
                }
            }
        }

        Ok(Self {
            non_missing: text_values.len(),
            missing_count,
            unique_count: unique.len(),
            text_values,
            numeric_values: Vec::new(),
            samples,
        })
    }

    fn extract_rendered(series: &Series, sample_size: usize) -> Result<Self> {
        let mut missing_count = 0;
        let mut non_missing = 0;
        let mut unique = HashSet::new();
        let mut samples = Vec::new();

        for idx in 0..series.len() {
            let value = series.get(idx)?;
            if matches!(value, AnyValue::Null) {
                missing_count += 1;
            } else {
                non_missing += 1;
                let rendered = render_any_value(&value);
                if samples.len() < sample_size {
                    samples.push(rendered.clone());
                }
                unique.insert(rendered);
            }
        }

        Ok(Self {
            non_missing,
            missing_count,
            unique_count: unique.len(),
            text_values: Vec::new(),
            numeric_values: Vec::new(),
            samples,
        })
    }
}

/// Column profiler over an in-memory dataset.
pub struct ColumnProfiler;

impl ColumnProfiler {
    /// Profile every column of the dataset, in dataset column order.
    ///
    /// A column whose profiling fails degrades to a default profile with
    /// a warning; only dataset-level failures propagate.
    pub fn profile_dataset(df: &DataFrame, config: &AnalysisConfig) -> Result<Vec<ColumnProfile>> {
        let mut profiles = Vec::with_capacity(df.width());

        for col_name in df.get_column_names() {
            let profile = match Self::profile_column(df, col_name, config) {
                Ok(profile) => profile,
                Err(error) => {
                    warn!(column = %col_name, %error, "column profiling degraded to defaults");
                    ColumnProfile::degraded(col_name)
                }
            };
            profiles.push(profile);
        }

        Ok(profiles)
    }

    /// Profile a single column.
    pub fn profile_column(
        df: &DataFrame,
        name: &str,
        config: &AnalysisConfig,
    ) -> Result<ColumnProfile> {
        let column = df.column(name)?;
        let series = column.as_materialized_series();
        let row_count = series.len();

        let view = ColumnView::extract(series, config.sample_size)?;

        let dtype = infer_dtype(
            series.dtype(),
            &view.text_values,
            &view.numeric_values,
            view.non_missing,
        );

        // String-encoded numeric columns get their values parsed so the
        // outlier fences see them too.
        let numeric_values = if dtype.is_numeric() && !view.text_values.is_empty() {
            view.text_values
                .iter()
                .filter_map(|v| parse_float_string(v))
                .collect()
        } else {
            view.numeric_values
        };

        let outlier_count = if dtype.is_numeric() {
            count_outliers(&numeric_values, config.iqr_multiplier)
        } else {
            0
        };

        let case_consistency = if dtype == Dtype::String {
            case_consistency_score(&view.text_values)
        } else {
            1.0
        };

        let fraction = |count: usize| {
            if row_count > 0 {
                count as f64 / row_count as f64
            } else {
                0.0
            }
        };

        Ok(ColumnProfile {
            name: name.to_string(),
            dtype,
            unique_count: view.unique_count,
            unique_percentage: fraction(view.unique_count),
            missing_count: view.missing_count,
            missing_percentage: fraction(view.missing_count),
            outlier_count,
            outlier_percentage: fraction(outlier_count),
            case_consistency_score: case_consistency,
            samples: view.samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(df: &DataFrame, name: &str) -> ColumnProfile {
        ColumnProfiler::profile_column(df, name, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_profile_integer_column() {
        let df = df!["count" => [1i64, 2, 3, 2, 1]].unwrap();
        let p = profile(&df, "count");

        assert_eq!(p.dtype, Dtype::Integer);
        assert_eq!(p.unique_count, 3);
        assert!((p.unique_percentage - 0.6).abs() < 1e-9);
        assert_eq!(p.missing_count, 0);
        assert_eq!(p.case_consistency_score, 1.0);
        assert_eq!(p.samples, vec!["1", "2", "3", "2", "1"]);
    }

    #[test]
    fn test_profile_float_column_with_nulls() {
        let df = df!["price" => [Some(1.5f64), None, Some(2.5), Some(1.5)]].unwrap();
        let p = profile(&df, "price");

        assert_eq!(p.dtype, Dtype::Float);
        assert_eq!(p.missing_count, 1);
        assert!((p.missing_percentage - 0.25).abs() < 1e-9);
        assert_eq!(p.unique_count, 2);
    }

    #[test]
    fn test_profile_nan_counts_as_missing() {
        let df = df!["v" => [1.0f64, f64::NAN, 3.0, 4.0]].unwrap();
        let p = profile(&df, "v");

        assert_eq!(p.missing_count, 1);
        assert_eq!(p.unique_count, 3);
    }

    #[test]
    fn test_profile_whole_float_column_reads_integer() {
        let df = df!["years" => [1.0f64, 2.0, 3.0]].unwrap();
        assert_eq!(profile(&df, "years").dtype, Dtype::Integer);
    }

    #[test]
    fn test_profile_string_column_case_consistency() {
        let df = df!["city" => ["oslo", "bergen", "OSLO", "tromso"]].unwrap();
        let p = profile(&df, "city");

        assert_eq!(p.dtype, Dtype::String);
        // 3 lowercase of 4 values.
        assert!((p.case_consistency_score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_profile_string_missing_markers() {
        let df = df!["status" => [Some("ok"), Some(""), Some("N/A"), None, Some("ok")]].unwrap();
        let p = profile(&df, "status");

        assert_eq!(p.missing_count, 3);
        assert!((p.missing_percentage - 0.6).abs() < 1e-9);
        assert_eq!(p.unique_count, 1);
        assert_eq!(p.samples, vec!["ok", "ok"]);
    }

    #[test]
    fn test_profile_numeric_strings_get_outlier_checked() {
        let df = df!["amount" => ["1", "2", "3", "4", "5", "6", "7", "8", "9", "1000"]].unwrap();
        let p = profile(&df, "amount");

        assert_eq!(p.dtype, Dtype::Integer);
        assert_eq!(p.outlier_count, 1);
        assert!((p.outlier_percentage - 0.1).abs() < 1e-9);
        // Numeric columns are fully case consistent by convention.
        assert_eq!(p.case_consistency_score, 1.0);
    }

    #[test]
    fn test_profile_outliers_in_native_numeric() {
        let df = df!["v" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]].unwrap();
        let p = profile(&df, "v");
        assert_eq!(p.outlier_count, 1);
    }

    #[test]
    fn test_profile_boolean_column() {
        let df = df!["active" => [true, false, true, true]].unwrap();
        let p = profile(&df, "active");

        assert_eq!(p.dtype, Dtype::Boolean);
        assert_eq!(p.unique_count, 2);
        assert_eq!(p.outlier_count, 0);
        assert_eq!(p.samples, vec!["true", "false", "true", "true"]);
    }

    #[test]
    fn test_profile_boolean_strings() {
        let df = df!["flag" => ["yes", "no", "yes"]].unwrap();
        assert_eq!(profile(&df, "flag").dtype, Dtype::Boolean);
    }

    #[test]
    fn test_profile_date_strings() {
        let df = df!["joined" => ["2024-01-15", "2024-02-20", "2024-03-25"]].unwrap();
        let p = profile(&df, "joined");

        assert_eq!(p.dtype, Dtype::Datetime);
        assert_eq!(p.case_consistency_score, 1.0);
    }

    #[test]
    fn test_profile_fully_missing_column() {
        let df = df!["gone" => [None::<&str>, None, None]].unwrap();
        let p = profile(&df, "gone");

        assert_eq!(p.dtype, Dtype::Unknown);
        assert_eq!(p.unique_count, 0);
        assert!((p.missing_percentage - 1.0).abs() < 1e-9);
        assert_eq!(p.outlier_count, 0);
        assert_eq!(p.case_consistency_score, 1.0);
        assert!(p.samples.is_empty());
    }

    #[test]
    fn test_profile_zero_rows_no_division() {
        let df = df!["empty" => Vec::<i64>::new()].unwrap();
        let p = profile(&df, "empty");

        assert_eq!(p.unique_percentage, 0.0);
        assert_eq!(p.missing_percentage, 0.0);
        assert_eq!(p.outlier_percentage, 0.0);
        assert_eq!(p.case_consistency_score, 1.0);
    }

    #[test]
    fn test_profile_single_row_uniqueness() {
        let df = df!["v" => [42i64]].unwrap();
        let p = profile(&df, "v");

        assert_eq!(p.unique_count, 1);
        assert!((p.unique_percentage - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_samples_are_first_values_in_row_order() {
        let df = df!["v" => [10i64, 20, 30, 40, 50, 60, 70]].unwrap();
        let p = profile(&df, "v");
        assert_eq!(p.samples, vec!["10", "20", "30", "40", "50"]);
    }

    #[test]
    fn test_samples_skip_missing_values() {
        let df = df!["v" => [None, Some(2i64), None, Some(4), Some(5)]].unwrap();
        let p = profile(&df, "v");
        assert_eq!(p.samples, vec!["2", "4", "5"]);
    }

    #[test]
    fn test_profile_dataset_preserves_column_order() {
        let df = df![
            "b" => [1i64, 2],
            "a" => ["x", "y"],
            "c" => [true, false]
        ]
        .unwrap();

        let profiles =
            ColumnProfiler::profile_dataset(&df, &AnalysisConfig::default()).unwrap();
        let names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unique_count_bounded_by_rows() {
        let df = df!["v" => [1i64, 1, 2, 3, 3]].unwrap();
        let p = profile(&df, "v");
        assert!(p.unique_count <= df.height());
    }
}

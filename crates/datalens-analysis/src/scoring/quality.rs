//! Data quality scoring from column profiles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{ColumnProfile, Dtype};

/// Per-column missingness detail, preserved verbatim for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingDetail {
    pub missing_count: usize,
    pub missing_percentage: f64,
}

/// Per-column outlier detail, preserved verbatim for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierDetail {
    pub outlier_count: usize,
    pub outlier_percentage: f64,
}

/// Per-column type detail, preserved verbatim for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDetail {
    pub dtype: Dtype,
    pub unique_count: usize,
    pub unique_percentage: f64,
}

/// Raw per-column maps backing the quality sub-scores.
///
/// All maps are keyed by column name in dataset column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnQualityDetails {
    pub missing_values: IndexMap<String, MissingDetail>,
    pub outliers: IndexMap<String, OutlierDetail>,
    pub data_types: IndexMap<String, TypeDetail>,
    pub consistency: IndexMap<String, f64>,
}

/// Dataset-level quality analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAnalysis {
    pub overall_quality_score: f64,
    pub missing_score: f64,
    pub outlier_score: f64,
    pub consistency_score: f64,
    pub column_details: ColumnQualityDetails,
}

/// Quality scorer over column profiles.
pub struct QualityScorer;

impl QualityScorer {
    /// Compute dataset-level quality scores and per-column detail maps.
    ///
    /// The overall score is the unweighted mean of the missing, outlier,
    /// and consistency sub-scores; no sub-score dominates.
    pub fn score(profiles: &[ColumnProfile], row_count: usize) -> QualityAnalysis {
        let column_count = profiles.len();
        let total_cells = row_count * column_count;
        let total_missing: usize = profiles.iter().map(|p| p.missing_count).sum();

        let missing_score = if total_cells > 0 {
            1.0 - total_missing as f64 / total_cells as f64
        } else {
            1.0
        };

        let (outlier_score, consistency_score) = if column_count > 0 {
            let mean_outlier_pct = profiles
                .iter()
                .map(|p| p.outlier_percentage)
                .sum::<f64>()
                / column_count as f64;
            let mean_consistency = profiles
                .iter()
                .map(|p| p.case_consistency_score)
                .sum::<f64>()
                / column_count as f64;
            (1.0 - mean_outlier_pct, mean_consistency)
        } else {
            (1.0, 1.0)
        };

        let overall_quality_score = (missing_score + outlier_score + consistency_score) / 3.0;

        let mut missing_values = IndexMap::with_capacity(column_count);
        let mut outliers = IndexMap::with_capacity(column_count);
        let mut data_types = IndexMap::with_capacity(column_count);
        let mut consistency = IndexMap::with_capacity(column_count);

        for profile in profiles {
            missing_values.insert(
                profile.name.clone(),
                MissingDetail {
                    missing_count: profile.missing_count,
                    missing_percentage: profile.missing_percentage,
                },
            );
            outliers.insert(
                profile.name.clone(),
                OutlierDetail {
                    outlier_count: profile.outlier_count,
                    outlier_percentage: profile.outlier_percentage,
                },
            );
            data_types.insert(
                profile.name.clone(),
                TypeDetail {
                    dtype: profile.dtype,
                    unique_count: profile.unique_count,
                    unique_percentage: profile.unique_percentage,
                },
            );
            consistency.insert(profile.name.clone(), profile.case_consistency_score);
        }

        QualityAnalysis {
            overall_quality_score,
            missing_score,
            outlier_score,
            consistency_score,
            column_details: ColumnQualityDetails {
                missing_values,
                outliers,
                data_types,
                consistency,
            },
        }
    }
}

//! Privacy risk scoring: per-column combination and dataset aggregation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::types::{ColumnProfile, ColumnScore, SensitivityResult};

/// Dataset-level privacy analysis.
///
/// The three tier buckets partition the dataset's column names; the
/// per-column map preserves original column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyAnalysis {
    pub overall_privacy_score: f64,
    pub high_risk_columns: Vec<String>,
    pub medium_risk_columns: Vec<String>,
    pub low_risk_columns: Vec<String>,
    pub total_columns: usize,
    pub column_scores: IndexMap<String, ColumnScore>,
}

/// Privacy scorer combining uniqueness and sensitivity signals.
pub struct PrivacyScorer;

impl PrivacyScorer {
    /// Score a single column.
    ///
    /// The combination is worst-of biased: a column flagged sensitive
    /// scores at least its sensitivity, and high uniqueness raises it
    /// further. Columns with no detected sensitivity fall back to the
    /// weighted uniqueness baseline. The result is monotone in both
    /// inputs and clamped to [0, 1].
    pub fn score_column(
        profile: &ColumnProfile,
        sensitivity: &SensitivityResult,
        config: &AnalysisConfig,
    ) -> ColumnScore {
        let uniqueness = profile.unique_percentage;
        let weighted_uniqueness = config.uniqueness_weight * uniqueness;

        let risk = if sensitivity.sensitivity_type.is_sensitive() {
            sensitivity.sensitive_data_score.max(weighted_uniqueness)
        } else {
            weighted_uniqueness
        };

        ColumnScore {
            privacy_risk_score: risk.clamp(0.0, 1.0),
            uniqueness_score: uniqueness,
            sensitive_data_score: sensitivity.sensitive_data_score,
            sensitivity_type: sensitivity.sensitivity_type,
            samples: profile.samples.clone(),
        }
    }

    /// Score every column and aggregate into the dataset-level analysis.
    ///
    /// `profiles` and `sensitivities` are index-aligned. The overall
    /// score is the unweighted mean over columns, a deliberate
    /// simplification over row-level risk modeling.
    pub fn analyze(
        profiles: &[ColumnProfile],
        sensitivities: &[SensitivityResult],
        config: &AnalysisConfig,
    ) -> PrivacyAnalysis {
        let mut column_scores = IndexMap::with_capacity(profiles.len());
        let mut high_risk_columns = Vec::new();
        let mut medium_risk_columns = Vec::new();
        let mut low_risk_columns = Vec::new();
        let mut risk_total = 0.0;

        for (profile, sensitivity) in profiles.iter().zip(sensitivities) {
            let score = Self::score_column(profile, sensitivity, config);
            risk_total += score.privacy_risk_score;

            let thresholds = config.risk_thresholds;
            if score.privacy_risk_score >= thresholds.high {
                high_risk_columns.push(profile.name.clone());
            } else if score.privacy_risk_score >= thresholds.medium {
                medium_risk_columns.push(profile.name.clone());
            } else {
                low_risk_columns.push(profile.name.clone());
            }

            column_scores.insert(profile.name.clone(), score);
        }

        let overall_privacy_score = if column_scores.is_empty() {
            0.0
        } else {
            risk_total / column_scores.len() as f64
        };

        PrivacyAnalysis {
            overall_privacy_score,
            high_risk_columns,
            medium_risk_columns,
            low_risk_columns,
            total_columns: column_scores.len(),
            column_scores,
        }
    }
}

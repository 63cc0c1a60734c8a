//! Final report assembly and invariant checking.

use std::collections::HashSet;

use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::scoring::{PrivacyAnalysis, QualityAnalysis};

/// The fixed `report_type` value stamped into every report.
pub const REPORT_TYPE: &str = "Data Privacy and Quality Analysis";

/// Basic shape metadata of the analyzed dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub column_names: Vec<String>,
}

impl DatasetSummary {
    /// Capture row/column counts and column order from a dataframe.
    pub fn from_frame(df: &DataFrame) -> Self {
        Self {
            row_count: df.height(),
            column_count: df.width(),
            column_names: df
                .get_column_names()
                .into_iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

/// The complete analysis report.
///
/// Immutable once assembled; field names and nesting are part of the
/// serialized contract. `timestamp` is the only field that differs
/// between runs on identical input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_type: String,
    pub timestamp: String,
    pub dataset: DatasetSummary,
    pub privacy_analysis: PrivacyAnalysis,
    pub quality_analysis: QualityAnalysis,
}

/// Assembles component outputs into the final [`Report`].
pub struct ReportAssembler;

impl ReportAssembler {
    /// Merge dataset metadata and scorer outputs into a report.
    ///
    /// Assembly is all-or-nothing: the tier buckets must partition the
    /// dataset's column names and every per-column map must be keyed by
    /// exactly that name set, otherwise the whole call fails.
    pub fn assemble(
        dataset: DatasetSummary,
        privacy: PrivacyAnalysis,
        quality: QualityAnalysis,
    ) -> Result<Report> {
        Self::validate(&dataset, &privacy, &quality)?;

        Ok(Report {
            report_type: REPORT_TYPE.to_string(),
            timestamp: Local::now().to_rfc3339(),
            dataset,
            privacy_analysis: privacy,
            quality_analysis: quality,
        })
    }

    fn validate(
        dataset: &DatasetSummary,
        privacy: &PrivacyAnalysis,
        quality: &QualityAnalysis,
    ) -> Result<()> {
        let expected: HashSet<&str> = dataset.column_names.iter().map(String::as_str).collect();

        let bucketed: Vec<&str> = privacy
            .high_risk_columns
            .iter()
            .chain(&privacy.medium_risk_columns)
            .chain(&privacy.low_risk_columns)
            .map(String::as_str)
            .collect();

        if bucketed.len() != dataset.column_names.len() {
            return Err(AnalysisError::ReportAssembly(format!(
                "risk tiers hold {} columns, dataset has {}",
                bucketed.len(),
                dataset.column_names.len()
            )));
        }

        let bucketed_set: HashSet<&str> = bucketed.iter().copied().collect();
        if bucketed_set.len() != bucketed.len() || bucketed_set != expected {
            return Err(AnalysisError::ReportAssembly(
                "risk tiers do not partition the dataset's columns".to_string(),
            ));
        }

        let keyed_maps: [Vec<&str>; 5] = [
            privacy.column_scores.keys().map(String::as_str).collect(),
            quality
                .column_details
                .missing_values
                .keys()
                .map(String::as_str)
                .collect(),
            quality
                .column_details
                .outliers
                .keys()
                .map(String::as_str)
                .collect(),
            quality
                .column_details
                .data_types
                .keys()
                .map(String::as_str)
                .collect(),
            quality
                .column_details
                .consistency
                .keys()
                .map(String::as_str)
                .collect(),
        ];

        for keys in &keyed_maps {
            let key_set: HashSet<&str> = keys.iter().copied().collect();
            if key_set != expected {
                return Err(AnalysisError::ReportAssembly(
                    "per-column maps are not keyed by the dataset's columns".to_string(),
                ));
            }
        }

        Ok(())
    }
}

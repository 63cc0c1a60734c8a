//! The top-level analysis engine.
//!
//! One call takes a parsed dataset and produces the full [`Report`]:
//! profile every column, classify sensitivity, score privacy and
//! quality, assemble. The engine holds no state beyond its
//! configuration and is safe to invoke repeatedly and concurrently on
//! independent datasets.

use polars::prelude::*;
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::profiler::ColumnProfiler;
use crate::reporting::{DatasetSummary, Report, ReportAssembler};
use crate::scoring::{PrivacyScorer, QualityScorer};
use crate::sensitivity::SensitivityClassifier;

/// Privacy and quality analysis engine over in-memory datasets.
///
/// # Example
///
/// ```rust,ignore
/// use datalens_analysis::{AnalysisConfig, DatasetAnalyzer};
/// use polars::prelude::*;
///
/// let df = df!["id" => [1i64, 2, 3], "city" => ["oslo", "bergen", "oslo"]]?;
/// let report = DatasetAnalyzer::default().analyze(&df)?;
/// println!("{}", serde_json::to_string_pretty(&report)?);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetAnalyzer {
    config: AnalysisConfig,
}

impl DatasetAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run one full analysis over the dataset.
    ///
    /// Fails fast on a dataset with zero columns; zero rows are
    /// tolerated. Individual columns that cannot be profiled degrade to
    /// defaults instead of aborting the run.
    pub fn analyze(&self, df: &DataFrame) -> Result<Report> {
        if df.width() == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        info!(
            rows = df.height(),
            columns = df.width(),
            "starting dataset analysis"
        );

        let profiles = ColumnProfiler::profile_dataset(df, &self.config)?;

        let sensitivities: Vec<_> = profiles
            .iter()
            .map(|profile| SensitivityClassifier::classify(&profile.name, &profile.samples))
            .collect();

        // All per-column results are in hand before any dataset-level
        // aggregation runs.
        let privacy = PrivacyScorer::analyze(&profiles, &sensitivities, &self.config);
        let quality = QualityScorer::score(&profiles, df.height());

        debug!(
            overall_privacy = privacy.overall_privacy_score,
            overall_quality = quality.overall_quality_score,
            high_risk = privacy.high_risk_columns.len(),
            "scoring complete"
        );

        let report =
            ReportAssembler::assemble(DatasetSummary::from_frame(df), privacy, quality)?;

        info!("dataset analysis complete");
        Ok(report)
    }
}

/// Analyze a dataset with the default configuration.
pub fn analyze(df: &DataFrame) -> Result<Report> {
    DatasetAnalyzer::default().analyze(df)
}

static_assertions::assert_impl_all!(DatasetAnalyzer: Send, Sync);
static_assertions::assert_impl_all!(Report: Send, Sync);

//! Dataset Privacy and Quality Analysis Library
//!
//! A deterministic scoring engine built with Rust and Polars that
//! quantifies privacy risk and data quality for tabular datasets.
//!
//! # Overview
//!
//! Given a dataset already parsed into a `polars::DataFrame`, one
//! analysis call produces a structured [`Report`]:
//!
//! - **Column Profiling**: type inference, cardinality, missingness,
//!   Tukey-fence outliers, case consistency, display samples
//! - **Sensitivity Classification**: heuristic rules over column names
//!   and sampled values mapping to a closed sensitivity taxonomy
//! - **Privacy Scoring**: per-column risk combining uniqueness and
//!   sensitivity, aggregated into low/medium/high tiers
//! - **Quality Scoring**: missingness, outlier, and consistency
//!   sub-scores with per-column detail maps
//! - **Report Assembly**: deterministic field ordering, validated
//!   invariants, stable serialization contract
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datalens_analysis::{analyze, AnalysisConfig, DatasetAnalyzer};
//! use polars::prelude::*;
//!
//! // Load data (the engine itself never parses files)
//! let df = CsvReadOptions::default()
//!     .with_has_header(true)
//!     .try_into_reader_with_file_path(Some("data.csv".into()))?
//!     .finish()?;
//!
//! // Option 1: defaults
//! let report = analyze(&df)?;
//!
//! // Option 2: tuned policy
//! let config = AnalysisConfig::builder()
//!     .uniqueness_weight(0.7)
//!     .high_risk_threshold(0.6)
//!     .build()?;
//! let report = DatasetAnalyzer::new(config).analyze(&df)?;
//!
//! println!("overall privacy risk: {:.3}", report.privacy_analysis.overall_privacy_score);
//! println!("overall quality:      {:.3}", report.quality_analysis.overall_quality_score);
//! for column in &report.privacy_analysis.high_risk_columns {
//!     println!("high risk: {column}");
//! }
//! ```
//!
//! # Configuration
//!
//! All tunable policy (scoring weight, tier thresholds, Tukey
//! multiplier, sample size) lives in [`AnalysisConfig`]; see the
//! [`config`] module. Scorers take the configuration by reference, so
//! differently-tuned runs can execute concurrently.
//!
//! # Determinism
//!
//! Running the engine twice on the identical dataset yields identical
//! reports except for the `timestamp` field. Per-column report maps
//! preserve the dataset's original column order.

// Core modules
pub mod analyzer;
pub mod config;
pub mod error;
pub mod profiler;
pub mod reporting;
pub mod scoring;
pub mod sensitivity;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use analyzer::{analyze, DatasetAnalyzer};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError, RiskThresholds};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use profiler::ColumnProfiler;
pub use reporting::{DatasetSummary, Report, ReportAssembler, REPORT_TYPE};
pub use scoring::{
    ColumnQualityDetails, MissingDetail, OutlierDetail, PrivacyAnalysis, PrivacyScorer,
    QualityAnalysis, QualityScorer, TypeDetail,
};
pub use sensitivity::SensitivityClassifier;
pub use types::{ColumnProfile, ColumnScore, Dtype, SensitivityResult, SensitivityType};

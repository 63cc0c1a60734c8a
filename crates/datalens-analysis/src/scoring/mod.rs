//! Scoring module.
//!
//! Combines profiler and classifier outputs into per-column and
//! dataset-level privacy risk and data quality scores.

mod privacy;
mod quality;

pub use privacy::{PrivacyAnalysis, PrivacyScorer};
pub use quality::{
    ColumnQualityDetails, MissingDetail, OutlierDetail, QualityAnalysis, QualityScorer, TypeDetail,
};

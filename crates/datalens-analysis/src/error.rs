//! Custom error types for the analysis engine.
//!
//! This module provides the error hierarchy using `thiserror`. Errors are
//! serializable so consumers (report exporters, frontends) can surface a
//! stable `{code, message}` pair without depending on the enum layout.
//!
//! The taxonomy distinguishes bad input (an empty dataset) from internal
//! computation failures; per-column profiling problems never surface here
//! because the profiler degrades those columns instead of failing the run.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for dataset analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The dataset has no columns to analyze.
    #[error("Dataset is empty: no columns to analyze")]
    EmptyDataset,

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report assembly found inconsistent component outputs.
    #[error("Failed to assemble report: {0}")]
    ReportAssembly(String),

    /// Internal error (a bug, not bad input).
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalysisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for consumers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ReportAssembly(_) => "REPORT_ASSEMBLY_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error was caused by bad input rather than an
    /// internal computation failure.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::EmptyDataset | Self::ColumnNotFound(_) | Self::InvalidConfig(_) => true,
            Self::WithContext { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

/// Serialize errors as a struct with `code` and `message` fields.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalysisError::Polars(e).with_context(context))
    }
}

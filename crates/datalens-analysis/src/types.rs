//! Core result types shared across the analysis components.

use serde::{Deserialize, Serialize};

/// Inferred data type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    /// Whole numbers, including float-typed columns whose values are all integral.
    Integer,
    /// Floating point numbers.
    Float,
    /// Free-form or categorical text.
    String,
    /// Boolean values, native or string-encoded (true/false, yes/no).
    Boolean,
    /// Dates and timestamps.
    Datetime,
    /// No non-missing values, or profiling degraded for this column.
    Unknown,
}

impl Dtype {
    /// Whether values of this type participate in outlier detection.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Lowercase name as it appears in serialized reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column statistics produced by the profiler.
///
/// Percentages are fractions in [0, 1]. A zero-row dataset reports 0.0
/// everywhere except `case_consistency_score`, which is 1.0 by the
/// "fully consistent when empty" convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: Dtype,
    pub unique_count: usize,
    pub unique_percentage: f64,
    pub missing_count: usize,
    pub missing_percentage: f64,
    pub outlier_count: usize,
    pub outlier_percentage: f64,
    pub case_consistency_score: f64,
    /// First few non-missing values in original row order, for display only.
    pub samples: Vec<String>,
}

impl ColumnProfile {
    /// Best-effort default profile for a column that could not be
    /// profiled. The run continues with zeroed scores.
    pub(crate) fn degraded(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dtype: Dtype::Unknown,
            unique_count: 0,
            unique_percentage: 0.0,
            missing_count: 0,
            missing_percentage: 0.0,
            outlier_count: 0,
            outlier_percentage: 0.0,
            case_consistency_score: 1.0,
            samples: Vec::new(),
        }
    }
}

/// Category of sensitive data a column may hold.
///
/// The enumeration is closed: classification always resolves to one of
/// these variants, falling back to `None` for unrecognized columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitivityType {
    /// No sensitive data detected.
    None,
    /// Directly identifying: IDs, names, national identifiers.
    Identifier,
    /// Not identifying alone but re-identifying in combination: age, gender, birth date.
    QuasiIdentifier,
    /// Financial data: income, accounts, card numbers.
    Financial,
    /// Contact channels: email addresses, phone numbers.
    Contact,
    /// Geographic data: addresses, postal codes, coordinates.
    Location,
}

impl SensitivityType {
    /// Fixed sensitivity score for this category.
    ///
    /// The table is total and ordered by intuitive risk:
    /// Identifier >= Financial >= Contact >= Location >= QuasiIdentifier >= None.
    pub fn base_score(self) -> f64 {
        match self {
            Self::Identifier => 0.70,
            Self::Financial => 0.60,
            Self::Contact => 0.50,
            Self::Location => 0.45,
            Self::QuasiIdentifier => 0.35,
            Self::None => 0.0,
        }
    }

    /// Whether this category represents any detected sensitivity.
    pub fn is_sensitive(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Human-readable display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Identifier => "Identifier",
            Self::QuasiIdentifier => "Quasi-identifier",
            Self::Financial => "Financial",
            Self::Contact => "Contact",
            Self::Location => "Location",
        }
    }
}

/// Classification outcome for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub sensitivity_type: SensitivityType,
    /// Fixed score from the per-type lookup table, in [0, 1].
    pub sensitive_data_score: f64,
}

impl SensitivityResult {
    pub fn new(sensitivity_type: SensitivityType) -> Self {
        Self {
            sensitivity_type,
            sensitive_data_score: sensitivity_type.base_score(),
        }
    }

    /// The fallback result for unrecognized columns.
    pub fn none() -> Self {
        Self::new(SensitivityType::None)
    }
}

/// Per-column privacy scoring outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnScore {
    pub privacy_risk_score: f64,
    pub uniqueness_score: f64,
    pub sensitive_data_score: f64,
    pub sensitivity_type: SensitivityType,
    pub samples: Vec<String>,
}

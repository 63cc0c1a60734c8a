//! Configuration types for the analysis engine.
//!
//! All tunable policy lives here: the uniqueness weighting used by the
//! privacy scorer, the risk tier thresholds, the Tukey fence multiplier,
//! and the display sample size. Scorers receive the configuration by
//! reference, so runs with different tunings can execute concurrently.

use serde::{Deserialize, Serialize};

/// Thresholds partitioning the [0, 1] privacy risk range into tiers.
///
/// A column lands in the high tier when its risk score is at least
/// `high`, in the medium tier when at least `medium`, and in the low
/// tier otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Lower bound of the medium risk tier. Default: 0.3
    pub medium: f64,
    /// Lower bound of the high risk tier. Default: 0.6
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: 0.3,
            high: 0.6,
        }
    }
}

/// Configuration for one analysis run.
///
/// Use [`AnalysisConfig::builder()`] for fluent construction with
/// validation.
///
/// # Example
///
/// ```rust,ignore
/// use datalens_analysis::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .uniqueness_weight(0.7)
///     .high_risk_threshold(0.6)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Weight applied to a column's uniqueness when combining it with
    /// the sensitivity score into a privacy risk. Default: 0.7
    pub uniqueness_weight: f64,

    /// Risk tier thresholds. Default: medium 0.3, high 0.6
    pub risk_thresholds: RiskThresholds,

    /// Multiplier on the interquartile range for the Tukey outlier
    /// fences. Default: 1.5
    pub iqr_multiplier: f64,

    /// Number of leading non-missing values kept per column for human
    /// review. Default: 5
    pub sample_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            uniqueness_weight: 0.7,
            risk_thresholds: RiskThresholds::default(),
            iqr_multiplier: 1.5,
            sample_size: 5,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.uniqueness_weight) {
            return Err(ConfigValidationError::InvalidWeight {
                field: "uniqueness_weight".to_string(),
                value: self.uniqueness_weight,
            });
        }

        let RiskThresholds { medium, high } = self.risk_thresholds;
        if !(0.0..=1.0).contains(&medium) || !(0.0..=1.0).contains(&high) || medium > high {
            return Err(ConfigValidationError::InvalidThresholds { medium, high });
        }

        if self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        if self.sample_size == 0 {
            return Err(ConfigValidationError::InvalidSampleSize(self.sample_size));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid weight for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidWeight { field: String, value: f64 },

    #[error(
        "Invalid risk thresholds: medium {medium}, high {high} \
         (must lie in [0.0, 1.0] with medium <= high)"
    )]
    InvalidThresholds { medium: f64, high: f64 },

    #[error("Invalid IQR multiplier: {0} (must be positive)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid sample size: {0} (must be at least 1)")]
    InvalidSampleSize(usize),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    uniqueness_weight: Option<f64>,
    medium_risk_threshold: Option<f64>,
    high_risk_threshold: Option<f64>,
    iqr_multiplier: Option<f64>,
    sample_size: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set the weight applied to uniqueness in the privacy risk score.
    pub fn uniqueness_weight(mut self, weight: f64) -> Self {
        self.uniqueness_weight = Some(weight);
        self
    }

    /// Set the lower bound of the medium risk tier.
    pub fn medium_risk_threshold(mut self, threshold: f64) -> Self {
        self.medium_risk_threshold = Some(threshold);
        self
    }

    /// Set the lower bound of the high risk tier.
    pub fn high_risk_threshold(mut self, threshold: f64) -> Self {
        self.high_risk_threshold = Some(threshold);
        self
    }

    /// Set the Tukey fence multiplier for outlier detection.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the number of sample values retained per column.
    pub fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation
    /// fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = RiskThresholds::default();
        let config = AnalysisConfig {
            uniqueness_weight: self.uniqueness_weight.unwrap_or(0.7),
            risk_thresholds: RiskThresholds {
                medium: self.medium_risk_threshold.unwrap_or(defaults.medium),
                high: self.high_risk_threshold.unwrap_or(defaults.high),
            },
            iqr_multiplier: self.iqr_multiplier.unwrap_or(1.5),
            sample_size: self.sample_size.unwrap_or(5),
        };

        config.validate()?;
        Ok(config)
    }
}

//! Heuristic sensitive-data classification.
//!
//! Classification looks only at a column's name and its sampled values.
//! Name rules run first; value patterns corroborate when the name says
//! nothing. Coverage is total: unrecognized columns resolve to
//! [`SensitivityType::None`], never an error.

mod rules;

use crate::types::{SensitivityResult, SensitivityType};

/// Sensitive-data classifier over column names and sample values.
pub struct SensitivityClassifier;

impl SensitivityClassifier {
    /// Classify a column from its name and sampled values.
    pub fn classify(column_name: &str, sample_values: &[String]) -> SensitivityResult {
        if let Some(sensitivity) = rules::match_name(column_name) {
            return SensitivityResult::new(sensitivity);
        }

        if let Some(sensitivity) = rules::match_values(sample_values) {
            return SensitivityResult::new(sensitivity);
        }

        SensitivityResult::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_by_name() {
        let result = SensitivityClassifier::classify("user_id", &[]);
        assert_eq!(result.sensitivity_type, SensitivityType::Identifier);
        assert_eq!(result.sensitive_data_score, 0.70);
    }

    #[test]
    fn test_classify_name_wins_over_values() {
        // Name says financial even though the values look like plain numbers.
        let result = SensitivityClassifier::classify("salary", &strings(&["50000", "61000"]));
        assert_eq!(result.sensitivity_type, SensitivityType::Financial);
    }

    #[test]
    fn test_classify_by_values_when_name_silent() {
        let result = SensitivityClassifier::classify(
            "primary",
            &strings(&["alice@example.com", "bob@company.org"]),
        );
        assert_eq!(result.sensitivity_type, SensitivityType::Contact);
        assert_eq!(result.sensitive_data_score, 0.50);
    }

    #[test]
    fn test_classify_unknown_defaults_to_none() {
        let result = SensitivityClassifier::classify("clicks", &strings(&["3", "7", "1"]));
        assert_eq!(result.sensitivity_type, SensitivityType::None);
        assert_eq!(result.sensitive_data_score, 0.0);
    }

    #[test]
    fn test_classify_no_samples_no_panic() {
        let result = SensitivityClassifier::classify("misc", &[]);
        assert_eq!(result.sensitivity_type, SensitivityType::None);
    }

    #[test]
    fn test_classify_score_in_range() {
        for name in ["id", "salary", "email", "address", "age", "clicks"] {
            let result = SensitivityClassifier::classify(name, &[]);
            assert!((0.0..=1.0).contains(&result.sensitive_data_score));
        }
    }
}

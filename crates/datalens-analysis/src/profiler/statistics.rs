//! Statistical helpers for column profiling: Tukey outlier fences and
//! case-consistency scoring.

use std::cmp::Ordering;

/// Compute the Tukey fences (Q1 - k*IQR, Q3 + k*IQR) for a set of values.
///
/// Returns `None` when fewer than 4 values are available, since the
/// quartiles are not meaningful below that.
pub(crate) fn tukey_fences(values: &[f64], multiplier: f64) -> Option<(f64, f64)> {
    let n = values.len();
    if n < 4 {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let q1_idx = (n as f64 * 0.25) as usize;
    let q3_idx = (n as f64 * 0.75) as usize;

    let q1 = sorted[q1_idx];
    let q3 = sorted[q3_idx];
    let iqr = q3 - q1;

    Some((q1 - multiplier * iqr, q3 + multiplier * iqr))
}

/// Count values falling outside the Tukey fences.
pub(crate) fn count_outliers(values: &[f64], multiplier: f64) -> usize {
    match tukey_fences(values, multiplier) {
        Some((lower, upper)) => values
            .iter()
            .filter(|&&v| v < lower || v > upper)
            .count(),
        None => 0,
    }
}

/// Letter-casing style of a single string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaseClass {
    Lowercase,
    Uppercase,
    Mixed,
}

/// Classify a value's casing by character composition.
///
/// Values without alphabetic characters fall into the mixed bucket.
pub(crate) fn classify_case(value: &str) -> CaseClass {
    let mut has_alpha = false;
    let mut all_lower = true;
    let mut all_upper = true;

    for c in value.chars().filter(|c| c.is_alphabetic()) {
        has_alpha = true;
        if !c.is_lowercase() {
            all_lower = false;
        }
        if !c.is_uppercase() {
            all_upper = false;
        }
    }

    if !has_alpha {
        CaseClass::Mixed
    } else if all_lower {
        CaseClass::Lowercase
    } else if all_upper {
        CaseClass::Uppercase
    } else {
        CaseClass::Mixed
    }
}

/// Fraction of values sharing the dominant casing style.
///
/// An empty slice scores 1.0 ("fully consistent when empty").
pub(crate) fn case_consistency_score(values: &[String]) -> f64 {
    if values.is_empty() {
        return 1.0;
    }

    let mut lowercase = 0usize;
    let mut uppercase = 0usize;
    let mut mixed = 0usize;

    for value in values {
        match classify_case(value) {
            CaseClass::Lowercase => lowercase += 1,
            CaseClass::Uppercase => uppercase += 1,
            CaseClass::Mixed => mixed += 1,
        }
    }

    let majority = lowercase.max(uppercase).max(mixed);
    majority as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    // ==================== tukey fence tests ====================

    #[test]
    fn test_count_outliers_with_outlier() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        assert_eq!(count_outliers(&values, 1.5), 1);
    }

    #[test]
    fn test_count_outliers_no_outlier() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(count_outliers(&values, 1.5), 0);
    }

    #[test]
    fn test_count_outliers_small_sample() {
        // Fewer than 4 values: quartiles are meaningless, report none.
        let values = [1.0, 2.0, 100.0];
        assert_eq!(count_outliers(&values, 1.5), 0);
    }

    #[test]
    fn test_count_outliers_constant_column() {
        let values = [5.0, 5.0, 5.0, 5.0, 5.0];
        assert_eq!(count_outliers(&values, 1.5), 0);
    }

    #[test]
    fn test_count_outliers_both_tails() {
        let mut values: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
        values.push(-1000.0);
        values.push(1000.0);
        assert_eq!(count_outliers(&values, 1.5), 2);
    }

    #[test]
    fn test_tukey_fences_unsorted_input() {
        let values = [9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0];
        let (lower, upper) = tukey_fences(&values, 1.5).unwrap();
        assert!(lower < 1.0);
        assert!(upper > 9.0);
    }

    #[test]
    fn test_wider_multiplier_finds_fewer_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 30.0];
        assert!(count_outliers(&values, 3.0) <= count_outliers(&values, 1.5));
    }

    // ==================== case consistency tests ====================

    #[test]
    fn test_classify_case() {
        assert_eq!(classify_case("hello"), CaseClass::Lowercase);
        assert_eq!(classify_case("HELLO"), CaseClass::Uppercase);
        assert_eq!(classify_case("Hello"), CaseClass::Mixed);
        assert_eq!(classify_case("abc123"), CaseClass::Lowercase);
        assert_eq!(classify_case("123"), CaseClass::Mixed);
    }

    #[test]
    fn test_case_consistency_all_lowercase() {
        let values = strings(&["apple", "banana", "cherry"]);
        assert_eq!(case_consistency_score(&values), 1.0);
    }

    #[test]
    fn test_case_consistency_majority() {
        // 2 lowercase, 1 uppercase, 1 mixed: majority is 2 of 4.
        let values = strings(&["apple", "banana", "CHERRY", "Durian"]);
        assert!((case_consistency_score(&values) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_case_consistency_even_split() {
        let values = strings(&["apple", "BANANA", "Cherry"]);
        assert!((case_consistency_score(&values) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_case_consistency_empty_is_one() {
        assert_eq!(case_consistency_score(&[]), 1.0);
    }
}

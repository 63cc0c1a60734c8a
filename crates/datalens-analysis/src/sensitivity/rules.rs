//! Ordered heuristic rule tables for sensitive-data classification.
//!
//! Two tiers: name rules run against the column name first; value
//! patterns run against sampled values only when no name rule fires.
//! Within each tier the tables are ordered most specific first and the
//! first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::SensitivityType;

fn rule(pattern: &str, sensitivity: SensitivityType) -> (Regex, SensitivityType) {
    (
        Regex::new(pattern).expect("Invalid sensitivity rule regex"),
        sensitivity,
    )
}

/// Column-name rules, most specific first.
pub(crate) static NAME_RULES: Lazy<Vec<(Regex, SensitivityType)>> = Lazy::new(|| {
    vec![
        // National identifiers and other hard identifiers by name.
        rule(
            r"(?i)ssn|social[_\s-]?security|nric|passport|national[_\s-]?id|tax[_\s-]?id|driver[_\s-]?licen[cs]e",
            SensitivityType::Identifier,
        ),
        // Contact channels.
        rule(
            r"(?i)e[_\s-]?mail|phone|mobile|\bfax\b",
            SensitivityType::Contact,
        ),
        // Financial fields.
        rule(
            r"(?i)income|salary|wage|account|credit|iban|\bswift\b|balance|revenue|payment|invoice|\bloan\b|debt",
            SensitivityType::Financial,
        ),
        // Geographic fields.
        rule(
            r"(?i)address|\bzip\b|postal|postcode|\bcity\b|\bstate\b|country|location|latitude|longitude|\blat\b|\blon\b|\blng\b",
            SensitivityType::Location,
        ),
        // Quasi-identifying demographics.
        rule(
            r"(?i)\bage\b|gender|\bsex\b|\bdob\b|birth|ethnic|\brace\b|marital|occupation|nationality|religion",
            SensitivityType::QuasiIdentifier,
        ),
        // Generic identifier names, last so the specific rules above win.
        rule(
            r"(?i)\bid\b|id$|\buid\b|uuid|guid|identifier|\bkey\b|\bindex\b|\bname\b|firstname|lastname|surname|username|\buser\b|serial",
            SensitivityType::Identifier,
        ),
    ]
});

/// Value patterns for structured PII in sampled values, most specific first.
pub(crate) static VALUE_PATTERNS: Lazy<Vec<(Regex, SensitivityType)>> = Lazy::new(|| {
    vec![
        // Singapore NRIC.
        rule(r"^[STFG]\d{7}[A-Z]$", SensitivityType::Identifier),
        // Credit card number.
        rule(r"^(?:\d{4}[- ]?){3}\d{4}$", SensitivityType::Financial),
        // Email address.
        rule(
            r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$",
            SensitivityType::Contact,
        ),
        // Phone number.
        rule(
            r"^(\+\d{1,3}[- ]?)?\(?\d{3}\)?[- ]?\d{3}[- ]?\d{4}$",
            SensitivityType::Contact,
        ),
        // IPv4 address.
        rule(
            r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$",
            SensitivityType::Identifier,
        ),
        // Street address.
        rule(
            r"^\d+\s+[A-Za-z]+\s+(Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd)\b",
            SensitivityType::Location,
        ),
        // Date of birth.
        rule(
            r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}$",
            SensitivityType::QuasiIdentifier,
        ),
    ]
});

/// First name rule matching the column name, if any.
///
/// Underscores and dashes are folded to spaces first so word-boundary
/// rules see "user_id" and "user id" alike.
pub(crate) fn match_name(column_name: &str) -> Option<SensitivityType> {
    let normalized = column_name.to_lowercase().replace(['_', '-'], " ");
    NAME_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&normalized))
        .map(|&(_, sensitivity)| sensitivity)
}

/// First value pattern matched by at least half of the non-empty samples.
pub(crate) fn match_values(samples: &[String]) -> Option<SensitivityType> {
    let values: Vec<&str> = samples
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if values.is_empty() {
        return None;
    }

    let needed = values.len().div_ceil(2);
    VALUE_PATTERNS
        .iter()
        .find(|(pattern, _)| {
            values.iter().filter(|v| pattern.is_match(v)).count() >= needed
        })
        .map(|&(_, sensitivity)| sensitivity)
}

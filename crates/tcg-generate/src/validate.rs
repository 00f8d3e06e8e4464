//! # Requirements Completeness Validator
//!
//! Scores free-text requirements against a fixed checklist of six pattern
//! categories. Purely lexical; no backend involvement.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The six checklist categories, each a (name, case-insensitive pattern)
/// pair. A category counts as present when its pattern matches anywhere in
/// the text.
const REQUIRED_ELEMENTS: &[(&str, &str)] = &[
    (
        "functional requirements",
        r"(?i)(shall|must|should).*(function|feature|capability)",
    ),
    ("acceptance criteria", r"(?i)(accept|criteria|condition)"),
    ("user roles", r"(?i)(user|role|actor|stakeholder)"),
    ("data requirements", r"(?i)(data|information|record)"),
    ("quality requirements", r"(?i)(quality|performance|reliability)"),
    (
        "regulatory requirements",
        r"(?i)(fda|iec|iso|gdpr|regulation|compliance)",
    ),
];

/// Keywords whose absence triggers the domain-context suggestion.
const HEALTHCARE_KEYWORDS: &[&str] = &[
    "medical device",
    "clinical",
    "healthcare",
    "patient",
    "quality",
    "safety",
    "regulatory",
    "fda",
    "iso",
    "gdpr",
];

/// Completeness below this percentage marks the requirements invalid.
const VALID_THRESHOLD: f64 = 70.0;

fn compiled_elements() -> &'static Vec<(&'static str, Regex)> {
    static ELEMENTS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    ELEMENTS.get_or_init(|| {
        REQUIRED_ELEMENTS
            .iter()
            .map(|(name, pattern)| {
                let regex = Regex::new(pattern).expect("checklist pattern compiles");
                (*name, regex)
            })
            .collect()
    })
}

/// Result of validating requirement text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsValidation {
    /// True when the completeness score reaches the threshold.
    pub valid: bool,
    /// `found_categories / 6 × 100`.
    pub completeness_score: f64,
    /// Checklist categories with no match, in checklist order.
    pub missing_elements: Vec<String>,
    /// Advisory strings for the caller.
    pub suggestions: Vec<String>,
}

/// Score requirement text against the six-category checklist.
pub fn validate_requirements(requirements: &str) -> RequirementsValidation {
    let mut missing_elements = Vec::new();
    let mut found = 0usize;

    for (name, regex) in compiled_elements() {
        if regex.is_match(requirements) {
            found += 1;
        } else {
            missing_elements.push((*name).to_string());
        }
    }

    let completeness_score = found as f64 / REQUIRED_ELEMENTS.len() as f64 * 100.0;
    let valid = completeness_score >= VALID_THRESHOLD;

    let mut suggestions = Vec::new();
    if !valid {
        suggestions.push(
            "Requirements appear incomplete. Consider adding more detailed functional specifications."
                .to_string(),
        );
    }

    let lower = requirements.to_lowercase();
    if !HEALTHCARE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        suggestions.push(
            "Consider adding healthcare-specific context and regulatory compliance requirements."
                .to_string(),
        );
    }

    RequirementsValidation {
        valid,
        completeness_score,
        missing_elements,
        suggestions,
    }
}

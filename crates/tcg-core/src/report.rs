//! # Compliance Report Records
//!
//! Output of a scoring pass: per-requirement coverage plus the aggregate
//! score, recommendations, and gaps. Reports are created fresh per scoring
//! call and have no identity beyond their content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::standard::ComplianceStandard;

/// Severity of a catalog requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The standard mandates this requirement.
    Required,
    /// The standard recommends but does not mandate it.
    Recommended,
}

impl Severity {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Recommended => "Recommended",
        }
    }
}

/// Coverage classification for one requirement.
///
/// The deterministic keyword scorer only ever emits `Covered` or
/// `NotCovered`; `PartiallyCovered` comes exclusively from the
/// backend-assisted analysis path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageStatus {
    #[serde(rename = "Covered")]
    Covered,
    #[serde(rename = "Partially Covered")]
    PartiallyCovered,
    #[serde(rename = "Not Covered")]
    NotCovered,
}

impl CoverageStatus {
    /// Wire representation (`"Covered"`, `"Partially Covered"`, `"Not Covered"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Covered => "Covered",
            Self::PartiallyCovered => "Partially Covered",
            Self::NotCovered => "Not Covered",
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coverage outcome for a single catalog requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCoverage {
    /// The standard this requirement belongs to.
    pub standard: ComplianceStandard,
    /// Catalog requirement identifier (e.g. `"21CFR820.30"`).
    pub requirement_id: String,
    /// Catalog requirement description (e.g. `"Design Controls"`).
    pub description: String,
    /// Catalog severity.
    pub severity: Severity,
    /// Classification produced by the scorer.
    pub coverage_status: CoverageStatus,
}

/// Result of scoring a set of test cases against one standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// The standard that was scored against.
    pub standard: ComplianceStandard,
    /// Coverage percentage in `[0, 100]`.
    pub overall_score: f64,
    /// Per-requirement coverage, in catalog order.
    pub requirements: Vec<RequirementCoverage>,
    /// Tiered and standard-specific recommendation strings.
    pub recommendations: Vec<String>,
    /// `"<requirement_id>: <description>"` per uncovered requirement.
    pub gaps: Vec<String>,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
}

impl ComplianceReport {
    /// Number of requirements classified as covered.
    pub fn covered_count(&self) -> usize {
        self.requirements
            .iter()
            .filter(|r| r.coverage_status == CoverageStatus::Covered)
            .count()
    }

    /// Total number of requirements evaluated.
    pub fn total_count(&self) -> usize {
        self.requirements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_status_wire_names_match_catalog() {
        assert_eq!(
            serde_json::to_string(&CoverageStatus::PartiallyCovered).unwrap(),
            "\"Partially Covered\""
        );
        assert_eq!(
            serde_json::to_string(&CoverageStatus::NotCovered).unwrap(),
            "\"Not Covered\""
        );
    }

    #[test]
    fn covered_count_counts_only_covered() {
        let report = ComplianceReport {
            standard: ComplianceStandard::Fda,
            overall_score: 50.0,
            requirements: vec![
                RequirementCoverage {
                    standard: ComplianceStandard::Fda,
                    requirement_id: "21CFR820.30".to_string(),
                    description: "Design Controls".to_string(),
                    severity: Severity::Required,
                    coverage_status: CoverageStatus::Covered,
                },
                RequirementCoverage {
                    standard: ComplianceStandard::Fda,
                    requirement_id: "21CFR820.75".to_string(),
                    description: "Process Validation".to_string(),
                    severity: Severity::Required,
                    coverage_status: CoverageStatus::NotCovered,
                },
                RequirementCoverage {
                    standard: ComplianceStandard::Fda,
                    requirement_id: "21CFR11.10".to_string(),
                    description: "Electronic Records".to_string(),
                    severity: Severity::Required,
                    coverage_status: CoverageStatus::PartiallyCovered,
                },
            ],
            recommendations: vec![],
            gaps: vec![],
            generated_at: Utc::now(),
        };
        assert_eq!(report.covered_count(), 1);
        assert_eq!(report.total_count(), 3);
    }
}

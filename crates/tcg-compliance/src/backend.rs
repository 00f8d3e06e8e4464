//! # Backend-Assisted Gap Analysis
//!
//! Delegates the semantic coverage judgment to the generation backend and
//! maps its covered/missing description lists back onto the standard's
//! catalog. Any failure (unreachable backend, malformed reply) falls
//! back to the deterministic keyword scorer. Single attempt, no retries.

use chrono::Utc;

use tcg_core::{
    ComplianceReport, ComplianceStandard, CoverageStatus, RequirementCoverage, TestCase,
};
use tcg_genai::{GapAnalysis, GenAiClient};

use crate::catalog::requirements_for;
use crate::scorer;

/// Score with the backend's gap analysis, falling back to the
/// deterministic scorer on any failure.
pub async fn score_with_backend(
    client: &GenAiClient,
    requirements: &str,
    test_cases: &[TestCase],
    standard: ComplianceStandard,
) -> ComplianceReport {
    let test_cases_json = match serde_json::to_string(test_cases) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "test case serialization failed, using keyword scorer");
            return scorer::score(test_cases, standard);
        }
    };

    match client
        .analyze_compliance_gaps(requirements, &test_cases_json, standard.as_str())
        .await
    {
        Ok(analysis) => report_from_analysis(&analysis, standard),
        Err(e) => {
            tracing::warn!(error = %e, %standard, "backend gap analysis failed, using keyword scorer");
            scorer::score(test_cases, standard)
        }
    }
}

/// Map a backend gap analysis onto the catalog for one standard.
///
/// A catalog requirement whose description appears as a substring of a
/// covered entry is `Covered`; of a missing entry, `Not Covered`; of
/// neither, `Partially Covered`. The backend's own score, clamped to
/// `[0, 100]`, becomes the overall score; its missing list becomes the
/// gap list.
pub fn report_from_analysis(
    analysis: &GapAnalysis,
    standard: ComplianceStandard,
) -> ComplianceReport {
    let requirements = requirements_for(standard)
        .iter()
        .map(|req| {
            let coverage_status = if analysis
                .covered_requirements
                .iter()
                .any(|covered| covered.contains(req.description))
            {
                CoverageStatus::Covered
            } else if analysis
                .missing_coverage
                .iter()
                .any(|missing| missing.contains(req.description))
            {
                CoverageStatus::NotCovered
            } else {
                CoverageStatus::PartiallyCovered
            };
            RequirementCoverage {
                standard,
                requirement_id: req.id.to_string(),
                description: req.description.to_string(),
                severity: req.severity,
                coverage_status,
            }
        })
        .collect();

    ComplianceReport {
        standard,
        overall_score: analysis.overall_compliance_score.clamp(0.0, 100.0),
        requirements,
        recommendations: analysis.recommendations.clone(),
        gaps: analysis.missing_coverage.clone(),
        generated_at: Utc::now(),
    }
}

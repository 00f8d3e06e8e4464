//! # Test Generation Endpoint
//!
//! `POST /api/generate-tests` — the main pipeline: stamp the incoming
//! requirements, generate test cases (backend or fallback), score them
//! against the requested standard, stamp the outgoing payload, and return
//! everything with explicit generation origin.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use tcg_core::{ComplianceReport, ComplianceStandard, TestCase, TestCaseType};
use tcg_privacy::{DataType, GdprMetadata};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to generate test cases from requirement text.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateTestsRequest {
    /// Free-text software requirements. Must be non-empty after trimming.
    pub requirements: String,
    /// Requested test category. Defaults to `functional`.
    #[serde(default = "default_test_type")]
    #[schema(value_type = String, example = "functional")]
    pub test_type: TestCaseType,
    /// Standard to generate and score against. Defaults to `FDA`.
    #[serde(default = "default_standard")]
    #[schema(value_type = String, example = "FDA")]
    pub compliance_standard: ComplianceStandard,
}

fn default_test_type() -> TestCaseType {
    TestCaseType::Functional
}

fn default_standard() -> ComplianceStandard {
    ComplianceStandard::Fda
}

impl Validate for GenerateTestsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.requirements.trim().is_empty() {
            return Err("requirements text is required".to_string());
        }
        if self.requirements.len() > 100_000 {
            return Err("requirements must not exceed 100000 characters".to_string());
        }
        Ok(())
    }
}

/// Generation run metadata echoed back to the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub test_type: TestCaseType,
    pub compliance_standard: ComplianceStandard,
    pub total_test_cases: usize,
    /// True when the test cases came from the generation backend rather
    /// than the deterministic rule table.
    pub ai_powered: bool,
    pub generation_backend: String,
    pub gdpr_compliant: bool,
}

/// Full response of one generation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTestsResponse {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// The sanitized requirements the pipeline actually ran on.
    pub requirements: String,
    /// `"backend"` or `"fallback"`.
    pub generation_origin: String,
    pub test_cases: Vec<TestCase>,
    pub compliance_report: ComplianceReport,
    pub metadata: GenerationMetadata,
    pub gdpr: GdprMetadata,
}

/// Build the generation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate-tests", post(generate_tests))
}

/// POST /api/generate-tests — Generate and score test cases.
#[utoipa::path(
    post,
    path = "/api/generate-tests",
    request_body = GenerateTestsRequest,
    responses(
        (status = 200, description = "Test cases with compliance report"),
        (status = 422, description = "Empty or malformed requirements", body = crate::error::ErrorBody),
    ),
    tag = "generation"
)]
pub(crate) async fn generate_tests(
    State(state): State<AppState>,
    body: Result<Json<GenerateTestsRequest>, JsonRejection>,
) -> Result<Json<GenerateTestsResponse>, AppError> {
    let req = extract_validated_json(body)?;

    // Sanitize the inbound requirements through the privacy stamper; the
    // pipeline runs on what survives the stamping.
    let stamped_input = state.stamper.stamp(
        serde_json::json!({"content": req.requirements}),
        DataType::Requirements,
    );
    let requirements = stamped_input
        .field("content")
        .and_then(|v| v.as_str())
        .unwrap_or(req.requirements.as_str())
        .to_string();

    let outcome = state
        .generator
        .generate(&requirements, req.test_type, req.compliance_standard)
        .await;
    let origin = outcome.origin().to_string();
    let ai_powered = !outcome.is_fallback();
    let test_cases = outcome.into_test_cases();

    let compliance_report = match &state.genai {
        Some(client) => {
            tcg_compliance::score_with_backend(
                client,
                &requirements,
                &test_cases,
                req.compliance_standard,
            )
            .await
        }
        None => tcg_compliance::score(&test_cases, req.compliance_standard),
    };

    let id = Uuid::new_v4();
    let stamped_output = state.stamper.stamp(
        serde_json::json!({"id": id.to_string()}),
        DataType::TestCases,
    );

    let backend_label = if state.backend_enabled() {
        "generative-backend (gemini-1.5-pro)".to_string()
    } else {
        "rule-based fallback".to_string()
    };

    Ok(Json(GenerateTestsResponse {
        id,
        timestamp: Utc::now(),
        requirements,
        generation_origin: origin,
        metadata: GenerationMetadata {
            test_type: req.test_type,
            compliance_standard: req.compliance_standard,
            total_test_cases: test_cases.len(),
            ai_powered,
            generation_backend: backend_label,
            gdpr_compliant: true,
        },
        test_cases,
        compliance_report,
        gdpr: stamped_output.gdpr,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirements_fail_validation() {
        let req = GenerateTestsRequest {
            requirements: "   ".to_string(),
            test_type: TestCaseType::Functional,
            compliance_standard: ComplianceStandard::Fda,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn defaults_are_functional_fda() {
        let req: GenerateTestsRequest =
            serde_json::from_str(r#"{"requirements": "The system shall log access."}"#).unwrap();
        assert_eq!(req.test_type, TestCaseType::Functional);
        assert_eq!(req.compliance_standard, ComplianceStandard::Fda);
    }

    #[test]
    fn unknown_standard_fails_deserialization() {
        let result: Result<GenerateTestsRequest, _> = serde_json::from_str(
            r#"{"requirements": "x", "compliance_standard": "HIPAA"}"#,
        );
        assert!(result.is_err());
    }
}

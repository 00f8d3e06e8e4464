//! # Requirements Validation Endpoint
//!
//! `POST /api/validate-requirements` — lexical completeness scoring.
//! Empty text is a valid input here (it scores zero); only malformed JSON
//! is rejected.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tcg_generate::{validate_requirements, RequirementsValidation};
use tcg_privacy::{DataType, GdprMetadata};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to validate requirement text.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateRequirementsRequest {
    /// Free-text software requirements. May be empty; an empty text
    /// simply scores zero.
    pub requirements: String,
}

impl Validate for ValidateRequirementsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.requirements.len() > 100_000 {
            return Err("requirements must not exceed 100000 characters".to_string());
        }
        Ok(())
    }
}

/// Validation result with privacy metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateRequirementsResponse {
    #[serde(flatten)]
    pub validation: RequirementsValidation,
    pub ai_powered: bool,
    pub gdpr_compliant: bool,
    pub gdpr: GdprMetadata,
}

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/validate-requirements", post(validate))
}

/// POST /api/validate-requirements — Score requirements completeness.
#[utoipa::path(
    post,
    path = "/api/validate-requirements",
    request_body = ValidateRequirementsRequest,
    responses(
        (status = 200, description = "Completeness score with missing elements"),
        (status = 422, description = "Malformed request body", body = crate::error::ErrorBody),
    ),
    tag = "generation"
)]
pub(crate) async fn validate(
    State(state): State<AppState>,
    body: Result<Json<ValidateRequirementsRequest>, JsonRejection>,
) -> Result<Json<ValidateRequirementsResponse>, AppError> {
    let req = extract_validated_json(body)?;

    let stamped = state.stamper.stamp(
        serde_json::json!({"content": req.requirements}),
        DataType::Requirements,
    );
    let requirements = stamped
        .field("content")
        .and_then(|v| v.as_str())
        .unwrap_or(req.requirements.as_str());

    let validation = validate_requirements(requirements);

    Ok(Json(ValidateRequirementsResponse {
        validation,
        ai_powered: state.backend_enabled(),
        gdpr_compliant: true,
        gdpr: stamped.gdpr,
    }))
}

//! # GDPR Endpoints
//!
//! Privacy status, the canned self-assessment report, and data-subject
//! rights dispatch. Rights handling is simulated, and responses say so
//! explicitly via `simulated: true`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use tcg_privacy::{
    gdpr_compliance_report, gdpr_status, DataType, GdprComplianceReport, GdprStatus,
    RightsRequestKind, RightsResponse,
};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// A data-subject rights request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RightsRequest {
    /// One of `access`, `rectification`, `erasure`, `portability`, `object`.
    #[schema(value_type = String, example = "access")]
    pub request_type: RightsRequestKind,
    /// Subject identifier the request concerns.
    pub user_id: String,
    /// Optional data type scope.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub data_type: Option<DataType>,
}

impl Validate for RightsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("user_id must not be empty".to_string());
        }
        if self.user_id.len() > 255 {
            return Err("user_id must not exceed 255 characters".to_string());
        }
        Ok(())
    }
}

/// Build the GDPR router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gdpr-status", get(status))
        .route("/api/gdpr/rights-request", post(rights_request))
        .route("/api/gdpr/compliance-report", get(compliance_report))
}

/// GET /api/gdpr-status — Current privacy status booleans.
#[utoipa::path(
    get,
    path = "/api/gdpr-status",
    responses((status = 200, description = "GDPR status booleans")),
    tag = "gdpr"
)]
pub(crate) async fn status(State(state): State<AppState>) -> Json<GdprStatus> {
    Json(gdpr_status(state.stamper.log().as_ref()))
}

/// POST /api/gdpr/rights-request — Handle a data-subject rights request.
#[utoipa::path(
    post,
    path = "/api/gdpr/rights-request",
    request_body = RightsRequest,
    responses(
        (status = 200, description = "Canned rights response, marked simulated"),
        (status = 422, description = "Missing user_id or unknown request type", body = crate::error::ErrorBody),
    ),
    tag = "gdpr"
)]
pub(crate) async fn rights_request(
    State(state): State<AppState>,
    body: Result<Json<RightsRequest>, JsonRejection>,
) -> Result<Json<RightsResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let response =
        state
            .stamper
            .handle_rights_request(req.request_type, &req.user_id, req.data_type);
    Ok(Json(response))
}

/// GET /api/gdpr/compliance-report — Canned GDPR self-assessment.
#[utoipa::path(
    get,
    path = "/api/gdpr/compliance-report",
    responses((status = 200, description = "GDPR self-assessment report")),
    tag = "gdpr"
)]
pub(crate) async fn compliance_report(State(state): State<AppState>) -> Json<GdprComplianceReport> {
    Json(gdpr_compliance_report(state.stamper.log().as_ref()))
}

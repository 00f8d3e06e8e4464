//! # ALM Export Endpoints
//!
//! Push caller-supplied test cases to Jira or Azure DevOps. A target with
//! no configured credentials yields a `"not configured"` report instead of
//! a request failure; remote errors land in the report's `error` field.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use tcg_alm_client::{AlmExportReport, AlmIntegrationStatus};
use tcg_core::TestCase;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

const MAX_TEST_CASES: usize = 100;

/// Request to export test cases as Jira issues.
#[derive(Debug, Deserialize, ToSchema)]
pub struct JiraExportRequest {
    #[schema(value_type = Vec<Object>)]
    pub test_cases: Vec<TestCase>,
    /// Jira project key the issues land in.
    pub project_key: String,
}

impl Validate for JiraExportRequest {
    fn validate(&self) -> Result<(), String> {
        if self.project_key.trim().is_empty() {
            return Err("project_key must not be empty".to_string());
        }
        if self.test_cases.len() > MAX_TEST_CASES {
            return Err(format!("test_cases must not exceed {MAX_TEST_CASES} entries"));
        }
        Ok(())
    }
}

/// Request to export test cases as Azure DevOps work items.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AzureExportRequest {
    #[schema(value_type = Vec<Object>)]
    pub test_cases: Vec<TestCase>,
    /// Azure DevOps project the work items land in.
    pub project: String,
}

impl Validate for AzureExportRequest {
    fn validate(&self) -> Result<(), String> {
        if self.project.trim().is_empty() {
            return Err("project must not be empty".to_string());
        }
        if self.test_cases.len() > MAX_TEST_CASES {
            return Err(format!("test_cases must not exceed {MAX_TEST_CASES} entries"));
        }
        Ok(())
    }
}

/// Build the ALM router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/export-alm/jira", post(export_jira))
        .route("/api/export-alm/azure", post(export_azure))
        .route("/api/alm-status", get(alm_status))
}

/// POST /api/export-alm/jira — Create Jira issues from test cases.
#[utoipa::path(
    post,
    path = "/api/export-alm/jira",
    request_body = JiraExportRequest,
    responses(
        (status = 200, description = "Export report; failures land in the error field"),
        (status = 422, description = "Malformed request", body = crate::error::ErrorBody),
    ),
    tag = "alm"
)]
pub(crate) async fn export_jira(
    State(state): State<AppState>,
    body: Result<Json<JiraExportRequest>, JsonRejection>,
) -> Result<Json<AlmExportReport>, AppError> {
    let req = extract_validated_json(body)?;
    let report = match &state.alm.jira {
        Some(client) => client.export_test_cases(&req.test_cases, &req.project_key).await,
        None => AlmExportReport::not_configured("Jira"),
    };
    Ok(Json(report))
}

/// POST /api/export-alm/azure — Create Azure DevOps work items.
#[utoipa::path(
    post,
    path = "/api/export-alm/azure",
    request_body = AzureExportRequest,
    responses(
        (status = 200, description = "Export report; failures land in the error field"),
        (status = 422, description = "Malformed request", body = crate::error::ErrorBody),
    ),
    tag = "alm"
)]
pub(crate) async fn export_azure(
    State(state): State<AppState>,
    body: Result<Json<AzureExportRequest>, JsonRejection>,
) -> Result<Json<AlmExportReport>, AppError> {
    let req = extract_validated_json(body)?;
    let report = match &state.alm.azure {
        Some(client) => client.export_test_cases(&req.test_cases, &req.project).await,
        None => AlmExportReport::not_configured("Azure DevOps"),
    };
    Ok(Json(report))
}

/// GET /api/alm-status — ALM integration status.
#[utoipa::path(
    get,
    path = "/api/alm-status",
    responses((status = 200, description = "Per-target enablement and capabilities")),
    tag = "alm"
)]
pub(crate) async fn alm_status(State(state): State<AppState>) -> Json<AlmIntegrationStatus> {
    Json(state.alm.integration_status())
}

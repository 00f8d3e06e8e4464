//! # Export Endpoint
//!
//! `POST /api/export-tests/{format}` — serialize caller-supplied test
//! cases as JUnit XML or Gherkin text. The export runs independently of
//! the generation pipeline.

use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tcg_core::TestCase;
use tcg_export::{export, ExportFormat};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request carrying the test cases to serialize.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportTestsRequest {
    /// Test case records, typically from a prior generation response.
    #[schema(value_type = Vec<Object>)]
    pub test_cases: Vec<TestCase>,
}

impl Validate for ExportTestsRequest {
    fn validate(&self) -> Result<(), String> {
        const MAX_TEST_CASES: usize = 500;
        if self.test_cases.len() > MAX_TEST_CASES {
            return Err(format!("test_cases must not exceed {MAX_TEST_CASES} entries"));
        }
        Ok(())
    }
}

/// Exported text plus a download filename.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExportTestsResponse {
    pub format: String,
    pub data: String,
    pub filename: String,
    pub gdpr_compliant: bool,
}

/// Build the export router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/export-tests/:format", post(export_tests))
}

/// POST /api/export-tests/{format} — Export test cases.
#[utoipa::path(
    post,
    path = "/api/export-tests/{format}",
    params(("format" = String, Path, description = "junit or cucumber")),
    request_body = ExportTestsRequest,
    responses(
        (status = 200, description = "Exported text", body = ExportTestsResponse),
        (status = 422, description = "Unsupported format or malformed body", body = crate::error::ErrorBody),
    ),
    tag = "export"
)]
pub(crate) async fn export_tests(
    Path(format): Path<String>,
    body: Result<Json<ExportTestsRequest>, JsonRejection>,
) -> Result<Json<ExportTestsResponse>, AppError> {
    let req = extract_validated_json(body)?;

    let export_format =
        ExportFormat::from_str(&format).map_err(|e| AppError::Validation(e.to_string()))?;

    let data = export(export_format, &req.test_cases);
    let filename = format!(
        "test_cases_{}.{}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        export_format.extension()
    );

    Ok(Json(ExportTestsResponse {
        format,
        data,
        filename,
        gdpr_compliant: true,
    }))
}

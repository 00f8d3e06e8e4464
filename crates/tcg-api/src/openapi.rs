//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TCG API — Test Case Generation & Compliance Service",
        version = "0.3.0",
        description = "Generates structured test cases from free-text software requirements \
                       (generation backend with deterministic fallback), scores them against \
                       regulatory compliance checklists, applies GDPR privacy stamping, and \
                       exports to JUnit/Gherkin and ALM systems.",
        license(name = "Apache-2.0"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    paths(
        crate::routes::generate::generate_tests,
        crate::routes::validate::validate,
        crate::routes::standards::list_standards,
        crate::routes::export::export_tests,
        crate::routes::document::process_document,
        crate::routes::gdpr::status,
        crate::routes::gdpr::rights_request,
        crate::routes::gdpr::compliance_report,
        crate::routes::alm::export_jira,
        crate::routes::alm::export_azure,
        crate::routes::alm::alm_status,
        crate::routes::status::backend_status,
        crate::routes::status::ai_health_check,
        crate::routes::status::system_status,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::generate::GenerateTestsRequest,
        crate::routes::validate::ValidateRequirementsRequest,
        crate::routes::standards::StandardsResponse,
        crate::routes::standards::StandardRequirement,
        crate::routes::export::ExportTestsRequest,
        crate::routes::export::ExportTestsResponse,
        crate::routes::gdpr::RightsRequest,
        crate::routes::alm::JiraExportRequest,
        crate::routes::alm::AzureExportRequest,
        crate::routes::status::HealthResponse,
    )),
    tags(
        (name = "generation", description = "Test case generation and validation"),
        (name = "compliance", description = "Compliance standards and scoring"),
        (name = "export", description = "Interchange format export"),
        (name = "documents", description = "Document text extraction"),
        (name = "gdpr", description = "Privacy status and data-subject rights"),
        (name = "alm", description = "ALM system export"),
        (name = "status", description = "Service status and health"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_spec))
}

async fn serve_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_contains_all_documented_paths() {
        let spec = ApiDoc::openapi();
        let paths = &spec.paths.paths;
        for expected in [
            "/api/generate-tests",
            "/api/validate-requirements",
            "/api/compliance-standards",
            "/api/export-tests/{format}",
            "/api/process-document",
            "/api/gdpr-status",
            "/api/gdpr/rights-request",
            "/api/gdpr/compliance-report",
            "/api/export-alm/jira",
            "/api/export-alm/azure",
            "/api/alm-status",
            "/api/google-cloud-status",
            "/api/ai-health-check",
            "/api/system-status",
        ] {
            assert!(paths.contains_key(expected), "missing path: {expected}");
        }
    }
}

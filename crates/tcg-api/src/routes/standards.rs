//! # Compliance Standards Endpoint
//!
//! `GET /api/compliance-standards` — the supported standard names plus
//! each standard's catalog checklist.

use std::collections::BTreeMap;

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tcg_compliance::requirements_for;
use tcg_core::ComplianceStandard;

use crate::state::AppState;

/// One catalog requirement row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StandardRequirement {
    pub id: String,
    pub description: String,
    pub severity: String,
}

/// Standards listing with per-standard checklists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StandardsResponse {
    pub standards: Vec<String>,
    pub details: BTreeMap<String, Vec<StandardRequirement>>,
}

/// Build the standards router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/compliance-standards", get(list_standards))
}

/// GET /api/compliance-standards — List supported standards.
#[utoipa::path(
    get,
    path = "/api/compliance-standards",
    responses(
        (status = 200, description = "Supported standards with their checklists", body = StandardsResponse),
    ),
    tag = "compliance"
)]
pub(crate) async fn list_standards() -> Json<StandardsResponse> {
    let standards: Vec<String> = ComplianceStandard::all()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    let details = ComplianceStandard::all()
        .iter()
        .map(|standard| {
            let rows = requirements_for(*standard)
                .iter()
                .map(|req| StandardRequirement {
                    id: req.id.to_string(),
                    description: req.description.to_string(),
                    severity: req.severity.as_str().to_string(),
                })
                .collect();
            (standard.as_str().to_string(), rows)
        })
        .collect();

    Json(StandardsResponse { standards, details })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn standards_listing_has_six_entries() {
        let app = router().with_state(AppState::unconfigured());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/compliance-standards")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: StandardsResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.standards.len(), 6);
        assert!(body.standards.contains(&"GDPR".to_string()));
        assert_eq!(body.details["FDA"].len(), 4);
        assert_eq!(body.details["FDA"][0].id, "21CFR820.30");
        assert_eq!(body.details["FDA"][0].severity, "Required");
    }
}

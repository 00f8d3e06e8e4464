//! # tcg-api — HTTP Surface for the TCG Stack
//!
//! Axum services for test case generation, requirements validation,
//! compliance scoring, export, document processing, privacy endpoints,
//! and service status.
//!
//! ## API Surface
//!
//! | Method & path                  | Module                 | Purpose                      |
//! |--------------------------------|------------------------|------------------------------|
//! | `GET /`                        | [`routes::status`]     | Health                       |
//! | `POST /api/generate-tests`     | [`routes::generate`]   | Generation pipeline          |
//! | `POST /api/validate-requirements` | [`routes::validate`] | Completeness scoring        |
//! | `GET /api/compliance-standards`| [`routes::standards`]  | Standards catalog            |
//! | `POST /api/export-tests/{format}` | [`routes::export`]  | JUnit / Gherkin export       |
//! | `POST /api/process-document`   | [`routes::document`]   | Document extraction          |
//! | `GET /api/google-cloud-status` | [`routes::status`]     | Backend status               |
//! | `POST /api/ai-health-check`    | [`routes::status`]     | Backend health probe         |
//! | `GET /api/gdpr-status`         | [`routes::gdpr`]       | Privacy status               |
//! | `POST /api/gdpr/rights-request`| [`routes::gdpr`]       | Rights dispatch (simulated)  |
//! | `GET /api/gdpr/compliance-report` | [`routes::gdpr`]    | GDPR self-assessment         |
//! | `GET /api/system-status`       | [`routes::status`]     | Aggregate status             |
//! | `POST /api/export-alm/jira`    | [`routes::alm`]        | Jira export                  |
//! | `POST /api/export-alm/azure`   | [`routes::alm`]        | Azure DevOps export          |
//! | `GET /api/alm-status`          | [`routes::alm`]        | ALM integration status       |
//! | `GET /metrics`                 | `lib.rs`               | Prometheus exposition        |
//! | `GET /openapi.json`            | [`openapi`]            | OpenAPI spec                 |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → MetricsMiddleware → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// The health probe (`GET /`) and `/metrics` are mounted outside the
/// metrics middleware so a scrape does not count itself.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();
    let metrics_on = state.config.metrics_enabled;

    let api = Router::new()
        .merge(routes::generate::router())
        .merge(routes::validate::router())
        .merge(routes::standards::router())
        .merge(routes::export::router())
        .merge(routes::document::router())
        .merge(routes::gdpr::router())
        .merge(routes::alm::router())
        .merge(routes::status::router())
        .merge(openapi::router());

    // Body size limit: 2 MiB. Prevents OOM from oversized request bodies
    // and document uploads.
    let mut api = api.layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    if metrics_on {
        api = api
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(metrics.clone()));
    }

    let api = api
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let mut unauthenticated = Router::new().route("/", axum::routing::get(routes::status::health));
    if metrics_on {
        unauthenticated = unauthenticated
            .route("/metrics", axum::routing::get(prometheus_metrics))
            .layer(Extension(metrics));
    }
    let unauthenticated = unauthenticated.with_state(state);

    Router::new().merge(unauthenticated).merge(api)
}

/// GET /metrics — Prometheus metrics scrape endpoint.
///
/// Updates the processing-log gauge from current state on each scrape
/// (pull model), then gathers and encodes all metrics in Prometheus text
/// exposition format.
async fn prometheus_metrics(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
) -> impl IntoResponse {
    metrics
        .processing_log_entries()
        .set(state.stamper.log().len() as f64);

    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode Prometheus metrics: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

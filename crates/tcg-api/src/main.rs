//! # tcg-api entry point
//!
//! Reads configuration from the environment, assembles the router, and
//! serves it. Every integration is optional: with no backend credential
//! the service runs on its deterministic paths.

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tcg_api::config::ServiceConfig;
use tcg_api::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::from_env(config);

    tracing::info!(
        %addr,
        backend_enabled = state.backend_enabled(),
        jira_enabled = state.alm.jira.is_some(),
        azure_enabled = state.alm.azure.is_some(),
        "starting tcg-api"
    );

    let app = tcg_api::app(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server terminated with error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

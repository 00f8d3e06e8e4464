//! # Service Configuration
//!
//! Environment-driven configuration. Every integration is optional:
//! absence of a credential disables that integration and the service keeps
//! running on its deterministic paths.

/// Process configuration read once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port to bind (`TCG_API_PORT`, default 5000).
    pub port: u16,
    /// Whether the Prometheus endpoint and middleware are registered
    /// (`TCG_METRICS_ENABLED`, default true).
    pub metrics_enabled: bool,
}

impl ServiceConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let port = std::env::var("TCG_API_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);
        Self {
            port,
            metrics_enabled: metrics_enabled(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            metrics_enabled: true,
        }
    }
}

/// Check `TCG_METRICS_ENABLED`. Defaults to `true` when the variable is
/// absent or set to anything other than `"false"`.
fn metrics_enabled() -> bool {
    std::env::var("TCG_METRICS_ENABLED")
        .map(|v| v.to_lowercase() != "false")
        .unwrap_or(true)
}

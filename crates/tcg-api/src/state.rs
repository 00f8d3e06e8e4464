//! # Application State
//!
//! Shared state for all request handlers: the generator (with its
//! optional backend client), the privacy stamper with its injected
//! processing-log sink, and the ALM client registry. Everything is behind
//! `Arc`; handlers never mutate state beyond log appends.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use tcg_alm_client::AlmRegistry;
use tcg_genai::{GenAiClient, GenAiConfig};
use tcg_generate::TestCaseGenerator;
use tcg_privacy::{InMemoryProcessingLog, PrivacyStamper, ProcessingLogSink, PseudonymSecret};

use crate::config::ServiceConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub generator: Arc<TestCaseGenerator>,
    /// Backend client shared with the scorer. `None` in fallback-only mode.
    pub genai: Option<Arc<GenAiClient>>,
    pub stamper: PrivacyStamper,
    pub alm: Arc<AlmRegistry>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state from the environment: backend client when a credential
    /// is present, ALM clients when their credentials are present, and an
    /// in-memory processing log.
    pub fn from_env(config: ServiceConfig) -> Self {
        let genai = GenAiConfig::from_env().and_then(|genai_config| {
            match GenAiClient::new(genai_config) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    tracing::warn!(error = %e, "generation backend client construction failed, running fallback-only");
                    None
                }
            }
        });
        if genai.is_none() {
            tracing::info!("no generation backend credential; deterministic fallback only");
        }

        let log: Arc<dyn ProcessingLogSink> = Arc::new(InMemoryProcessingLog::new());
        let stamper = PrivacyStamper::new(PseudonymSecret::from_env(), log);

        Self {
            config: Arc::new(config),
            generator: Arc::new(TestCaseGenerator::new(genai.clone())),
            genai,
            stamper,
            alm: Arc::new(AlmRegistry::from_env()),
            started_at: Utc::now(),
        }
    }

    /// State with no external integrations configured. Used by tests and
    /// as the base for fallback-only deployments.
    pub fn unconfigured() -> Self {
        let log: Arc<dyn ProcessingLogSink> = Arc::new(InMemoryProcessingLog::new());
        Self {
            config: Arc::new(ServiceConfig::default()),
            generator: Arc::new(TestCaseGenerator::new(None)),
            genai: None,
            stamper: PrivacyStamper::new(PseudonymSecret::new("test-secret"), log),
            alm: Arc::new(AlmRegistry::default()),
            started_at: Utc::now(),
        }
    }

    /// True when the generation backend is configured.
    pub fn backend_enabled(&self) -> bool {
        self.genai.is_some()
    }
}

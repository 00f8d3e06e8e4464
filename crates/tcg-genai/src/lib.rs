//! # tcg-genai — Generation Backend Client
//!
//! Typed reqwest client for the generative-text API that turns requirement
//! text into test case JSON and performs compliance gap analysis.
//!
//! ## Architecture
//!
//! [`GenAiClient`] wraps a `reqwest::Client` with the backend base URL,
//! API key, and a bounded per-request timeout. It is `Send + Sync` and
//! designed to be shared via `Arc` across async tasks.
//!
//! ## Failure Discipline
//!
//! Every call is a single attempt; there are no retries anywhere in this
//! crate. Callers treat any [`GenAiError`] as a signal to switch to their
//! deterministic fallback path. The client never panics on malformed
//! backend output; it returns [`GenAiError::MalformedResponse`].

pub mod error;
pub mod extract;
pub mod prompt;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use error::GenAiError;
pub use extract::{extract_json_object, strip_code_fences};

/// Configuration for the generation backend client.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key for the backend. The only mandatory field.
    pub api_key: String,
    /// Base URL of the generative API
    /// (default: `https://generativelanguage.googleapis.com/v1beta`).
    pub base_url: String,
    /// Model identifier appended to the generate-content path.
    pub model: String,
    /// Request timeout in seconds (default: 45).
    pub timeout_secs: u64,
}

impl GenAiConfig {
    /// Create a configuration with default base URL, model, and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-pro".to_string(),
            timeout_secs: 45,
        }
    }

    /// Override the base URL (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read configuration from the environment.
    ///
    /// Returns `None` when `TCG_GENAI_API_KEY` is absent; the caller runs
    /// in fallback-only mode. `TCG_GENAI_BASE_URL` optionally overrides the
    /// endpoint.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("TCG_GENAI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("TCG_GENAI_BASE_URL") {
            config.base_url = base_url;
        }
        Some(config)
    }
}

/// Request body for the generate-content endpoint.
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ContentPart<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

/// Response body of the generate-content endpoint. Only the fields the
/// pipeline consumes are modeled.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Result of a backend gap analysis, extracted from the model's JSON reply.
#[derive(Debug, Clone, Deserialize)]
pub struct GapAnalysis {
    /// Backend's own aggregate score. Defaults to 70 when the model omits it.
    #[serde(default = "default_overall_score")]
    pub overall_compliance_score: f64,
    /// Requirement descriptions the backend considers covered.
    #[serde(default)]
    pub covered_requirements: Vec<String>,
    /// Requirement descriptions the backend considers missing.
    #[serde(default)]
    pub missing_coverage: Vec<String>,
    /// Free-text recommendations from the backend.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

fn default_overall_score() -> f64 {
    70.0
}

/// HTTP client for the generation backend.
#[derive(Debug)]
pub struct GenAiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenAiClient {
    /// Build a client from configuration.
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenAiError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            model: config.model,
            api_key: config.api_key,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send one prompt to the backend and return the first candidate's text.
    ///
    /// Single attempt, bounded by the configured timeout. Non-2xx statuses
    /// and empty candidate lists are errors; the caller falls back.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GenAiError> {
        let url = self.generate_url();
        let body = GenerateContentRequest {
            contents: vec![ContentPart {
                parts: vec![TextPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenAiError::Timeout {
                        endpoint: url.clone(),
                    }
                } else {
                    GenAiError::Http {
                        endpoint: url.clone(),
                        source: e,
                    }
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let excerpt = resp.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                endpoint: url,
                status: status.as_u16(),
                body: truncate(&excerpt, 512),
            });
        }

        let parsed: GenerateContentResponse =
            resp.json().await.map_err(|e| GenAiError::Deserialization {
                endpoint: url.clone(),
                source: e,
            })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(GenAiError::EmptyResponse { endpoint: url })?;

        tracing::debug!(chars = text.len(), "generation backend replied");
        Ok(text)
    }

    /// Generate test cases for the given requirements and return the parsed
    /// JSON object from the model's reply.
    ///
    /// The reply text is stripped of code fences and sliced between its
    /// first `{` and last `}` before parsing, tolerating prose the model
    /// wraps around the JSON.
    pub async fn generate_test_cases(
        &self,
        requirements: &str,
        test_type: &str,
        standard: &str,
        framework_description: &str,
    ) -> Result<serde_json::Value, GenAiError> {
        let prompt = prompt::test_case_prompt(requirements, test_type, standard, framework_description);
        let text = self.generate_content(&prompt).await?;
        parse_object_reply(&text)
    }

    /// Run the backend gap analysis and parse its reply.
    pub async fn analyze_compliance_gaps(
        &self,
        requirements: &str,
        test_cases_json: &str,
        standard: &str,
    ) -> Result<GapAnalysis, GenAiError> {
        let prompt = prompt::gap_analysis_prompt(requirements, test_cases_json, standard);
        let text = self.generate_content(&prompt).await?;
        let value = parse_object_reply(&text)?;
        serde_json::from_value(value).map_err(|e| GenAiError::MalformedResponse {
            reason: format!("gap analysis shape mismatch: {e}"),
        })
    }
}

/// Strip fences, slice the outermost JSON object, and parse it.
fn parse_object_reply(text: &str) -> Result<serde_json::Value, GenAiError> {
    let stripped = strip_code_fences(text);
    let object = extract_json_object(&stripped).ok_or_else(|| GenAiError::MalformedResponse {
        reason: "no JSON object found in backend reply".to_string(),
    })?;
    serde_json::from_str(object).map_err(|e| GenAiError::MalformedResponse {
        reason: format!("backend reply is not valid JSON: {e}"),
    })
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GenAiConfig::new("key");
        assert_eq!(config.timeout_secs, 45);
        assert!(config.base_url.contains("generativelanguage"));
        assert_eq!(config.model, "gemini-1.5-pro");
    }

    #[test]
    fn generate_url_joins_model_path() {
        let client = GenAiClient::new(GenAiConfig::new("k").with_base_url("http://localhost:1234/")).unwrap();
        assert_eq!(
            client.generate_url(),
            "http://localhost:1234/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn parse_object_reply_tolerates_prose_and_fences() {
        let reply = "Here you go:\n```json\n{\"test_cases\": []}\n```\nDone.";
        let value = parse_object_reply(reply).unwrap();
        assert!(value.get("test_cases").unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn parse_object_reply_rejects_proseless_garbage() {
        assert!(parse_object_reply("no json here").is_err());
        assert!(parse_object_reply("{not valid json}").is_err());
    }

    #[test]
    fn gap_analysis_defaults_score_to_70() {
        let analysis: GapAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(analysis.overall_compliance_score, 70.0);
        assert!(analysis.covered_requirements.is_empty());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "ééééé";
        let t = truncate(s, 3);
        assert!(t.starts_with('é'));
    }
}

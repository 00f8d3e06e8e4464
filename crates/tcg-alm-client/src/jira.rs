//! # Jira Export Client
//!
//! Creates one Jira issue (type `Test`) per test case via
//! `POST /rest/api/2/issue` with basic authentication.

use std::time::Duration;

use serde::Deserialize;

use tcg_core::TestCase;

use crate::error::AlmError;
use crate::format::jira_description;
use crate::{AlmExportReport, ExportedItem};

/// Configuration for the Jira client.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Jira base URL (e.g. `https://company.atlassian.net`).
    pub base_url: String,
    /// Account user (email) for basic auth.
    pub user: String,
    /// API token for basic auth.
    pub token: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl JiraConfig {
    /// Create a configuration with the default timeout.
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            user: user.into(),
            token: token.into(),
            timeout_secs: 30,
        }
    }

    /// Read configuration from `TCG_JIRA_URL` / `TCG_JIRA_USER` /
    /// `TCG_JIRA_TOKEN`. Any absent variable disables Jira.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("TCG_JIRA_URL").ok()?;
        let user = std::env::var("TCG_JIRA_USER").ok()?;
        let token = std::env::var("TCG_JIRA_TOKEN").ok()?;
        if base_url.trim().is_empty() || user.trim().is_empty() || token.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url, user, token))
    }
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

/// HTTP client for Jira issue creation.
#[derive(Debug)]
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    user: String,
    token: String,
}

impl JiraClient {
    /// Build a client from configuration.
    pub fn new(config: JiraConfig) -> Result<Self, AlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AlmError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user: config.user,
            token: config.token,
        })
    }

    /// Create one issue, returning its key.
    async fn create_issue(
        &self,
        test_case: &TestCase,
        project_key: &str,
    ) -> Result<String, AlmError> {
        let endpoint = format!("{}/rest/api/2/issue", self.base_url);
        let body = serde_json::json!({
            "fields": {
                "project": {"key": project_key},
                "summary": test_case.title,
                "description": jira_description(test_case),
                "issuetype": {"name": "Test"},
                "labels": test_case.compliance_tags,
            }
        });

        let resp = self
            .client
            .post(&endpoint)
            .basic_auth(&self.user, Some(&self.token))
            .json(&body)
            .send()
            .await
            .map_err(|e| AlmError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AlmError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedIssue = resp.json().await.map_err(|e| AlmError::Deserialization {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        Ok(created.key)
    }

    /// Export test cases sequentially, one issue per case.
    ///
    /// Stops at the first failure and reports it; already-created issues
    /// stay in the report.
    pub async fn export_test_cases(
        &self,
        test_cases: &[TestCase],
        project_key: &str,
    ) -> AlmExportReport {
        let mut items = Vec::new();
        for test_case in test_cases {
            match self.create_issue(test_case, project_key).await {
                Ok(key) => {
                    let url = format!("{}/browse/{}", self.base_url, key);
                    items.push(ExportedItem {
                        remote_id: key,
                        test_case_id: test_case.id,
                        url,
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, test_case = %test_case.id, "Jira export failed");
                    return AlmExportReport::failed(items, format!("Jira export failed: {e}"));
                }
            }
        }
        AlmExportReport::completed(items)
    }
}

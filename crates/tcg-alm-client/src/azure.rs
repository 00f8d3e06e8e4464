//! # Azure DevOps Export Client
//!
//! Creates one `Test Case` work item per test case via the work item
//! tracking API using JSON-patch documents and PAT authentication.

use std::time::Duration;

use serde::Deserialize;

use tcg_core::TestCase;

use crate::error::AlmError;
use crate::format::{azure_description, azure_steps};
use crate::{AlmExportReport, ExportedItem};

/// Configuration for the Azure DevOps client.
#[derive(Debug, Clone)]
pub struct AzureDevOpsConfig {
    /// Organization URL (e.g. `https://dev.azure.com/org`).
    pub base_url: String,
    /// Personal access token.
    pub token: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl AzureDevOpsConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout_secs: 30,
        }
    }

    /// Read configuration from `TCG_AZURE_DEVOPS_URL` /
    /// `TCG_AZURE_DEVOPS_TOKEN`. Any absent variable disables Azure DevOps.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("TCG_AZURE_DEVOPS_URL").ok()?;
        let token = std::env::var("TCG_AZURE_DEVOPS_TOKEN").ok()?;
        if base_url.trim().is_empty() || token.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url, token))
    }
}

#[derive(Debug, Deserialize)]
struct CreatedWorkItem {
    id: u64,
    #[serde(rename = "_links")]
    links: WorkItemLinks,
}

#[derive(Debug, Deserialize)]
struct WorkItemLinks {
    html: WorkItemLink,
}

#[derive(Debug, Deserialize)]
struct WorkItemLink {
    href: String,
}

/// HTTP client for Azure DevOps work item creation.
#[derive(Debug)]
pub struct AzureDevOpsClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl AzureDevOpsClient {
    /// Build a client from configuration.
    pub fn new(config: AzureDevOpsConfig) -> Result<Self, AlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AlmError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    /// JSON-patch document for one work item.
    fn patch_document(test_case: &TestCase) -> serde_json::Value {
        serde_json::json!([
            {"op": "add", "path": "/fields/System.Title", "value": test_case.title},
            {"op": "add", "path": "/fields/System.Description", "value": azure_description(test_case)},
            {"op": "add", "path": "/fields/Microsoft.VSTS.TCM.Steps", "value": azure_steps(test_case)},
            {"op": "add", "path": "/fields/System.Tags", "value": test_case.compliance_tags.join("; ")},
        ])
    }

    async fn create_work_item(
        &self,
        test_case: &TestCase,
        project: &str,
    ) -> Result<CreatedWorkItem, AlmError> {
        let endpoint = format!(
            "{}/{}/_apis/wit/workitems/$Test%20Case?api-version=6.0",
            self.base_url, project
        );

        let resp = self
            .client
            .post(&endpoint)
            .basic_auth("", Some(&self.token))
            .header(reqwest::header::CONTENT_TYPE, "application/json-patch+json")
            .json(&Self::patch_document(test_case))
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

        resp.json().await.map_err(|e| AlmError::Deserialization {
            endpoint: endpoint.clone(),
            source: e,
        })
    }

    /// Export test cases sequentially, one work item per case.
    ///
    /// Stops at the first failure and reports it; already-created work
    /// items stay in the report.
    pub async fn export_test_cases(
        &self,
        test_cases: &[TestCase],
        project: &str,
    ) -> AlmExportReport {
        let mut items = Vec::new();
        for test_case in test_cases {
            match self.create_work_item(test_case, project).await {
                Ok(work_item) => {
                    items.push(ExportedItem {
                        remote_id: work_item.id.to_string(),
                        test_case_id: test_case.id,
                        url: work_item.links.html.href,
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, test_case = %test_case.id, "Azure DevOps export failed");
                    return AlmExportReport::failed(
                        items,
                        format!("Azure DevOps export failed: {e}"),
                    );
                }
            }
        }
        AlmExportReport::completed(items)
    }
}

//! # tcg-alm-client — ALM Export Clients
//!
//! Maps test case records onto Jira issues and Azure DevOps work items and
//! posts them to the respective REST APIs.
//!
//! ## Graceful Unconfigured Behavior
//!
//! Each client exists only when its credentials are present in the
//! environment. A missing client never fails a request: the export report
//! states `"not configured"` and zero exported items.
//!
//! ## Failure Discipline
//!
//! Export failures are captured in the report's `error` field rather than
//! raised; one attempt per item, no retries, sequential posting.

pub mod azure;
pub mod error;
pub mod format;
pub mod jira;

use serde::{Deserialize, Serialize};

pub use azure::{AzureDevOpsClient, AzureDevOpsConfig};
pub use error::AlmError;
pub use jira::{JiraClient, JiraConfig};

use tcg_core::TestCaseId;

/// One successfully exported item (Jira issue or Azure work item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedItem {
    /// Remote identifier (Jira issue key or Azure work item id).
    pub remote_id: String,
    /// The test case this item was created from.
    pub test_case_id: TestCaseId,
    /// Browse URL of the created item.
    pub url: String,
}

/// Result of one export run. Failures land in `error`; they are never
/// raised to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlmExportReport {
    pub success: bool,
    pub exported_count: usize,
    pub items: Vec<ExportedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlmExportReport {
    /// Report for a target whose credentials are absent.
    pub fn not_configured(target: &str) -> Self {
        Self {
            success: false,
            exported_count: 0,
            items: Vec::new(),
            error: Some(format!("{target} not configured")),
        }
    }

    pub(crate) fn completed(items: Vec<ExportedItem>) -> Self {
        Self {
            success: true,
            exported_count: items.len(),
            items,
            error: None,
        }
    }

    pub(crate) fn failed(items: Vec<ExportedItem>, error: String) -> Self {
        Self {
            success: false,
            exported_count: items.len(),
            items,
            error: Some(error),
        }
    }
}

/// Capability listing for one integration target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationTarget {
    pub enabled: bool,
    pub capabilities: Vec<String>,
}

/// Status of all ALM integrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlmIntegrationStatus {
    pub jira: IntegrationTarget,
    pub azure_devops: IntegrationTarget,
    pub supported_exports: Vec<String>,
}

/// The configured ALM clients, built once at startup.
#[derive(Debug, Default)]
pub struct AlmRegistry {
    pub jira: Option<JiraClient>,
    pub azure: Option<AzureDevOpsClient>,
}

impl AlmRegistry {
    /// Build clients from the environment. Missing or malformed
    /// credentials disable the corresponding target.
    pub fn from_env() -> Self {
        let jira = JiraConfig::from_env().and_then(|config| match JiraClient::new(config) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "Jira client construction failed, disabling");
                None
            }
        });
        let azure =
            AzureDevOpsConfig::from_env().and_then(|config| match AzureDevOpsClient::new(config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "Azure DevOps client construction failed, disabling");
                    None
                }
            });
        Self { jira, azure }
    }

    /// Integration status for the status endpoints.
    pub fn integration_status(&self) -> AlmIntegrationStatus {
        let jira_enabled = self.jira.is_some();
        let azure_enabled = self.azure.is_some();
        AlmIntegrationStatus {
            jira: IntegrationTarget {
                enabled: jira_enabled,
                capabilities: if jira_enabled {
                    vec![
                        "Test Case Creation".to_string(),
                        "Issue Linking".to_string(),
                        "Custom Fields".to_string(),
                    ]
                } else {
                    Vec::new()
                },
            },
            azure_devops: IntegrationTarget {
                enabled: azure_enabled,
                capabilities: if azure_enabled {
                    vec![
                        "Work Item Creation".to_string(),
                        "Test Case Management".to_string(),
                        "Traceability".to_string(),
                    ]
                } else {
                    Vec::new()
                },
            },
            supported_exports: vec![
                "JUnit XML".to_string(),
                "Cucumber/Gherkin".to_string(),
                "Jira".to_string(),
                "Azure DevOps".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_reports_everything_disabled() {
        let registry = AlmRegistry::default();
        let status = registry.integration_status();
        assert!(!status.jira.enabled);
        assert!(status.jira.capabilities.is_empty());
        assert!(!status.azure_devops.enabled);
        assert_eq!(status.supported_exports.len(), 4);
    }

    #[test]
    fn not_configured_report_shape() {
        let report = AlmExportReport::not_configured("Jira");
        assert!(!report.success);
        assert_eq!(report.exported_count, 0);
        assert_eq!(report.error.as_deref(), Some("Jira not configured"));
    }
}

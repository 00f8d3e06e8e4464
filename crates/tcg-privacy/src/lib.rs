//! # tcg-privacy — Privacy Stamping
//!
//! Applies GDPR processing discipline to payloads crossing the API
//! boundary: data minimization (per-data-type field allowlists),
//! pseudonymization (one-way SHA-256 digests of known sensitive fields),
//! and a metadata block naming the lawful basis and retention deadline.
//! Every stamping operation and rights request is appended to an injected
//! [`ProcessingLogSink`].
//!
//! ## Simulated Rights Handling
//!
//! The data-subject-rights handlers return fixed-shape canned responses;
//! no data is actually looked up, rectified, or erased. Every response
//! carries `simulated: true` and a disclosure note so callers cannot
//! mistake the canned output for a real erasure or export.

pub mod log;
pub mod report;
pub mod rights;
pub mod stamper;

use zeroize::{Zeroize, ZeroizeOnDrop};

pub use log::{InMemoryProcessingLog, LogRecord, ProcessingLogSink, ProcessingRecord};
pub use report::{gdpr_compliance_report, gdpr_status, GdprComplianceReport, GdprStatus};
pub use rights::{RightsRequestKind, RightsResponse};
pub use stamper::{GdprMetadata, PrivacyStamper, StampedPayload};

use serde::{Deserialize, Serialize};

/// Category of payload being stamped. Drives the minimization allowlist,
/// lawful basis, and retention period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    TestCases,
    Requirements,
    UserData,
    AuditLogs,
}

impl DataType {
    /// Wire representation (`"test_cases"`, `"requirements"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestCases => "test_cases",
            Self::Requirements => "requirements",
            Self::UserData => "user_data",
            Self::AuditLogs => "audit_logs",
        }
    }

    /// All data types, in retention-policy order.
    pub fn all() -> &'static [DataType] {
        &[
            Self::TestCases,
            Self::Requirements,
            Self::UserData,
            Self::AuditLogs,
        ]
    }

    /// Lawful basis for processing under GDPR Art. 6.
    pub fn lawful_basis(&self) -> &'static str {
        match self {
            // Art. 6(1)(f) — compliance testing and process improvement.
            Self::TestCases | Self::Requirements => "legitimate_interest",
            // Art. 6(1)(a).
            Self::UserData => "consent",
            // Art. 6(1)(c).
            Self::AuditLogs => "legal_obligation",
        }
    }

    /// Retention period in days.
    pub fn retention_days(&self) -> i64 {
        match self {
            Self::TestCases => 2555,
            Self::Requirements => 2190,
            Self::UserData => 1095,
            Self::AuditLogs => 2555,
        }
    }

    /// Retention policy category label.
    pub fn retention_category(&self) -> &'static str {
        match self {
            Self::TestCases => "business_records",
            Self::Requirements => "project_data",
            Self::UserData => "personal_data",
            Self::AuditLogs => "compliance_data",
        }
    }

    /// Field allowlist for data minimization (Art. 5(1)(c)).
    pub fn allowlist(&self) -> &'static [&'static str] {
        match self {
            Self::TestCases => &[
                "id",
                "title",
                "description",
                "test_type",
                "compliance_tags",
                "requirements_traceability",
            ],
            Self::Requirements => &["id", "content", "compliance_standard", "created_at"],
            Self::UserData => &["user_id", "role", "permissions", "session_id"],
            Self::AuditLogs => &["timestamp", "action", "user_id", "resource_id", "result"],
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The process-level pseudonymization secret. Zeroized on drop; never
/// logged or serialized.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PseudonymSecret(String);

impl PseudonymSecret {
    /// Wrap a secret string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Read the secret from `TCG_SECRET_KEY`, falling back to an ephemeral
    /// random value. The fallback keeps pseudonyms consistent within one
    /// process lifetime but not across restarts.
    pub fn from_env() -> Self {
        match std::env::var("TCG_SECRET_KEY") {
            Ok(secret) if !secret.trim().is_empty() => Self(secret),
            _ => {
                tracing::warn!(
                    "TCG_SECRET_KEY not set; pseudonyms will not be stable across restarts"
                );
                Self(uuid::Uuid::new_v4().to_string())
            }
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PseudonymSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PseudonymSecret(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&DataType::TestCases).unwrap(),
            "\"test_cases\""
        );
        let back: DataType = serde_json::from_str("\"audit_logs\"").unwrap();
        assert_eq!(back, DataType::AuditLogs);
    }

    #[test]
    fn lawful_bases_follow_article_six() {
        assert_eq!(DataType::TestCases.lawful_basis(), "legitimate_interest");
        assert_eq!(DataType::Requirements.lawful_basis(), "legitimate_interest");
        assert_eq!(DataType::UserData.lawful_basis(), "consent");
        assert_eq!(DataType::AuditLogs.lawful_basis(), "legal_obligation");
    }

    #[test]
    fn retention_periods_match_policy() {
        assert_eq!(DataType::TestCases.retention_days(), 2555);
        assert_eq!(DataType::Requirements.retention_days(), 2190);
        assert_eq!(DataType::UserData.retention_days(), 1095);
        assert_eq!(DataType::AuditLogs.retention_days(), 2555);
    }

    #[test]
    fn secret_debug_does_not_leak() {
        let secret = PseudonymSecret::new("hunter2");
        assert_eq!(format!("{secret:?}"), "PseudonymSecret(..)");
    }
}

//! # Payload Stamping
//!
//! The stamping pipeline for one payload: minimize fields to the
//! data-type allowlist, pseudonymize known sensitive fields, attach the
//! GDPR metadata block, and append an Art. 30 record to the log sink.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use tcg_core::ProcessingId;

use crate::log::{LogRecord, ProcessingLogSink, ProcessingRecord};
use crate::{DataType, PseudonymSecret};

/// Field names replaced by pseudonyms wherever they appear, regardless of
/// semantic meaning.
const SENSITIVE_FIELDS: &[&str] = &["user_id", "email", "name", "ip_address", "session_id"];

/// Fixed purpose-limitation statement recorded with every stamping.
const PURPOSE_LIMITATION: &str =
    "Healthcare test case generation and compliance validation";

/// GDPR metadata block attached to every stamped payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdprMetadata {
    /// Fresh identifier tying the payload to its processing-log record.
    pub processing_id: ProcessingId,
    /// Lawful basis tag for the payload's data type.
    pub lawful_basis: String,
    /// Deadline after which the data must not be retained.
    pub retention_until: DateTime<Utc>,
    pub data_minimization_applied: bool,
    pub subject_rights_applicable: bool,
    pub automated_decision_making: bool,
    pub data_protection_impact_assessed: bool,
}

/// A payload after stamping: the surviving fields plus the metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampedPayload {
    /// Minimized, pseudonymized payload fields.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
    /// Attached GDPR metadata.
    pub gdpr: GdprMetadata,
}

impl StampedPayload {
    /// Look up a surviving field.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Applies the stamping pipeline and records every operation in the
/// injected log sink.
#[derive(Clone)]
pub struct PrivacyStamper {
    secret: PseudonymSecret,
    log: Arc<dyn ProcessingLogSink>,
}

impl std::fmt::Debug for PrivacyStamper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivacyStamper")
            .field("log_len", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl PrivacyStamper {
    /// Create a stamper over a secret and a log sink.
    pub fn new(secret: PseudonymSecret, log: Arc<dyn ProcessingLogSink>) -> Self {
        Self { secret, log }
    }

    /// Access the processing log sink.
    pub fn log(&self) -> &Arc<dyn ProcessingLogSink> {
        &self.log
    }

    /// Stamp one payload object.
    ///
    /// Non-object values are wrapped under a `"content"` key so the
    /// pipeline always operates on a field map.
    pub fn stamp(&self, payload: serde_json::Value, data_type: DataType) -> StampedPayload {
        let fields = match payload {
            serde_json::Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("content".to_string(), other);
                map
            }
        };

        let minimized = minimize(fields, data_type);
        let pseudonymized = self.pseudonymize(minimized);

        let processing_id = ProcessingId::new();
        let now = Utc::now();
        let metadata = GdprMetadata {
            processing_id,
            lawful_basis: data_type.lawful_basis().to_string(),
            retention_until: now + Duration::days(data_type.retention_days()),
            data_minimization_applied: true,
            subject_rights_applicable: true,
            automated_decision_making: true,
            data_protection_impact_assessed: true,
        };

        self.log
            .append(LogRecord::Processing(processing_record(
                processing_id,
                now,
                data_type,
            )));
        tracing::debug!(%processing_id, %data_type, "payload stamped");

        StampedPayload {
            fields: pseudonymized,
            gdpr: metadata,
        }
    }

    /// Compute the pseudonym for one field value.
    ///
    /// Deterministic for a fixed secret: `pseudo_` followed by the first
    /// 16 hex characters of `SHA-256(value + "_" + secret)`. One-way by
    /// construction.
    pub fn pseudonymize_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        hasher.update(b"_");
        hasher.update(self.secret.expose().as_bytes());
        let digest = hasher.finalize();

        let mut hex = String::with_capacity(16);
        for byte in digest.iter().take(8) {
            use std::fmt::Write;
            let _ = write!(hex, "{byte:02x}");
        }
        format!("pseudo_{hex}")
    }

    fn pseudonymize(
        &self,
        mut fields: serde_json::Map<String, serde_json::Value>,
    ) -> serde_json::Map<String, serde_json::Value> {
        for field in SENSITIVE_FIELDS {
            if let Some(value) = fields.get_mut(*field) {
                let original = match &value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                *value = serde_json::Value::String(self.pseudonymize_value(&original));
            }
        }
        fields
    }
}

/// Keep only allowlisted fields for the data type.
fn minimize(
    fields: serde_json::Map<String, serde_json::Value>,
    data_type: DataType,
) -> serde_json::Map<String, serde_json::Value> {
    let allowed = data_type.allowlist();
    fields
        .into_iter()
        .filter(|(key, _)| allowed.contains(&key.as_str()))
        .collect()
}

/// Build the Art. 30 record for one stamping operation.
fn processing_record(
    processing_id: ProcessingId,
    timestamp: DateTime<Utc>,
    data_type: DataType,
) -> ProcessingRecord {
    ProcessingRecord {
        processing_id,
        timestamp,
        data_type,
        lawful_basis: data_type.lawful_basis().to_string(),
        user_consent: true,
        data_minimization: true,
        purpose_limitation: PURPOSE_LIMITATION.to_string(),
        retention_period_days: data_type.retention_days(),
        controller: "Healthcare Test Case Generation System".to_string(),
        processor: "AI-Powered Test Generation Service".to_string(),
        data_categories: vec![
            "Healthcare requirements".to_string(),
            "Test case data".to_string(),
            "Compliance metadata".to_string(),
        ],
        recipients: vec![
            "Internal QA team".to_string(),
            "Compliance officers".to_string(),
        ],
        third_country_transfers: false,
        technical_measures: vec![
            "Encryption".to_string(),
            "Pseudonymization".to_string(),
            "Access controls".to_string(),
        ],
        organizational_measures: vec![
            "Data retention policy".to_string(),
            "User consent management".to_string(),
            "Audit procedures".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::InMemoryProcessingLog;
    use proptest::prelude::*;
    use serde_json::json;

    fn stamper() -> (PrivacyStamper, Arc<InMemoryProcessingLog>) {
        let log = Arc::new(InMemoryProcessingLog::new());
        let stamper = PrivacyStamper::new(
            PseudonymSecret::new("test-secret"),
            Arc::clone(&log) as Arc<dyn ProcessingLogSink>,
        );
        (stamper, log)
    }

    #[test]
    fn minimization_drops_unlisted_fields() {
        let (stamper, _) = stamper();
        let stamped = stamper.stamp(
            json!({
                "id": "tc-1",
                "title": "A test",
                "internal_notes": "drop me",
            }),
            DataType::TestCases,
        );
        assert!(stamped.field("id").is_some());
        assert!(stamped.field("title").is_some());
        assert!(stamped.field("internal_notes").is_none());
    }

    #[test]
    fn sensitive_fields_are_pseudonymized() {
        let (stamper, _) = stamper();
        let stamped = stamper.stamp(
            json!({
                "user_id": "alice@example.com",
                "role": "qa",
                "session_id": "sess-42",
            }),
            DataType::UserData,
        );
        let user_id = stamped.field("user_id").unwrap().as_str().unwrap();
        assert!(user_id.starts_with("pseudo_"));
        assert_ne!(user_id, "alice@example.com");
        assert_eq!(user_id.len(), "pseudo_".len() + 16);
        // Non-sensitive allowlisted fields pass through unchanged.
        assert_eq!(stamped.field("role").unwrap(), "qa");
    }

    #[test]
    fn pseudonyms_are_deterministic_per_secret() {
        let (stamper, _) = stamper();
        assert_eq!(
            stamper.pseudonymize_value("alice"),
            stamper.pseudonymize_value("alice")
        );
        assert_ne!(
            stamper.pseudonymize_value("alice"),
            stamper.pseudonymize_value("bob")
        );
    }

    #[test]
    fn different_secrets_produce_different_pseudonyms() {
        let log: Arc<dyn ProcessingLogSink> = Arc::new(InMemoryProcessingLog::new());
        let a = PrivacyStamper::new(PseudonymSecret::new("secret-a"), Arc::clone(&log));
        let b = PrivacyStamper::new(PseudonymSecret::new("secret-b"), log);
        assert_ne!(a.pseudonymize_value("alice"), b.pseudonymize_value("alice"));
    }

    #[test]
    fn metadata_block_is_complete() {
        let (stamper, _) = stamper();
        let before = Utc::now();
        let stamped = stamper.stamp(json!({"content": "reqs"}), DataType::Requirements);

        assert_eq!(stamped.gdpr.lawful_basis, "legitimate_interest");
        assert!(stamped.gdpr.data_minimization_applied);
        assert!(stamped.gdpr.subject_rights_applicable);
        assert!(stamped.gdpr.automated_decision_making);
        assert!(stamped.gdpr.data_protection_impact_assessed);

        let expected_min = before + Duration::days(2190);
        assert!(stamped.gdpr.retention_until >= expected_min);
    }

    #[test]
    fn non_object_payload_is_wrapped_as_content() {
        let (stamper, _) = stamper();
        let stamped = stamper.stamp(json!("raw requirements text"), DataType::Requirements);
        assert_eq!(stamped.field("content").unwrap(), "raw requirements text");
    }

    #[test]
    fn each_stamp_appends_one_log_record() {
        let (stamper, log) = stamper();
        assert_eq!(log.len(), 0);
        stamper.stamp(json!({"content": "a"}), DataType::Requirements);
        stamper.stamp(json!({"content": "b"}), DataType::Requirements);
        assert_eq!(log.len(), 2);

        match &log.snapshot()[0] {
            LogRecord::Processing(record) => {
                assert_eq!(record.data_type, DataType::Requirements);
                assert_eq!(record.lawful_basis, "legitimate_interest");
                assert!(!record.third_country_transfers);
            }
            other => panic!("expected processing record, got {other:?}"),
        }
    }

    #[test]
    fn stamped_payload_serializes_fields_at_top_level() {
        let (stamper, _) = stamper();
        let stamped = stamper.stamp(json!({"content": "text"}), DataType::Requirements);
        let value = serde_json::to_value(&stamped).unwrap();
        assert_eq!(value["content"], "text");
        assert!(value["gdpr"]["processing_id"].is_string());
    }

    proptest! {
        #[test]
        fn pseudonym_shape_holds_for_arbitrary_values(value in ".*") {
            let log: Arc<dyn ProcessingLogSink> = Arc::new(InMemoryProcessingLog::new());
            let stamper = PrivacyStamper::new(PseudonymSecret::new("s"), log);
            let pseudonym = stamper.pseudonymize_value(&value);
            prop_assert!(pseudonym.starts_with("pseudo_"));
            prop_assert_eq!(pseudonym.len(), "pseudo_".len() + 16);
            prop_assert_eq!(pseudonym, stamper.pseudonymize_value(&value));
        }
    }
}

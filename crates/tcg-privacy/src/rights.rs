//! # Data Subject Rights Requests
//!
//! Dispatches access / rectification / erasure / portability / objection
//! requests to five canned handlers. No data is looked up or mutated:
//! every response is explicitly marked `simulated: true` with a disclosure
//! note, and the request is appended to the processing log.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log::{LogRecord, RightsRequestRecord};
use crate::stamper::PrivacyStamper;
use crate::DataType;

/// Kind of rights request (GDPR Chapter III).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RightsRequestKind {
    /// Art. 15 — right of access.
    Access,
    /// Art. 16 — right to rectification.
    Rectification,
    /// Art. 17 — right to erasure.
    Erasure,
    /// Art. 20 — right to data portability.
    Portability,
    /// Art. 21 — right to object.
    Object,
}

impl RightsRequestKind {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Rectification => "rectification",
            Self::Erasure => "erasure",
            Self::Portability => "portability",
            Self::Object => "object",
        }
    }
}

/// Kind-specific canned detail block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RightsDetail {
    Access {
        data_categories: Vec<String>,
        processing_purposes: Vec<String>,
        recipients: Vec<String>,
        rights_available: Vec<String>,
        automated_decision_making: bool,
        automated_decision_logic: String,
    },
    Rectification {
        rectification_available: bool,
        modifiable_fields: Vec<String>,
        non_modifiable_fields: Vec<String>,
        justification: String,
    },
    Erasure {
        erasure_completed: bool,
        data_categories_erased: Vec<String>,
        data_categories_retained: Vec<String>,
        retention_justification: String,
    },
    Portability {
        portable_data_available: bool,
        export_formats: Vec<String>,
        data_included: Vec<String>,
        export_preparation_time: String,
    },
    Objection {
        objection_honored: bool,
        processing_stopped: Vec<String>,
        processing_continued: Vec<String>,
        legal_justification: String,
    },
}

/// Response to one rights request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightsResponse {
    pub request_id: Uuid,
    pub request_type: RightsRequestKind,
    pub user_id: String,
    pub processed_at: chrono::DateTime<chrono::Utc>,
    pub status: String,
    /// Always true: the handlers state compliance behavior without
    /// performing data operations.
    pub simulated: bool,
    pub disclosure: String,
    #[serde(flatten)]
    pub detail: RightsDetail,
}

impl PrivacyStamper {
    /// Handle one rights request: build the canned response and append a
    /// record to the processing log.
    pub fn handle_rights_request(
        &self,
        kind: RightsRequestKind,
        user_id: &str,
        _data_type: Option<DataType>,
    ) -> RightsResponse {
        let request_id = Uuid::new_v4();
        let processed_at = Utc::now();

        let detail = match kind {
            RightsRequestKind::Access => access_detail(),
            RightsRequestKind::Rectification => rectification_detail(),
            RightsRequestKind::Erasure => erasure_detail(),
            RightsRequestKind::Portability => portability_detail(),
            RightsRequestKind::Object => objection_detail(),
        };

        self.log().append(LogRecord::RightsRequest(RightsRequestRecord {
            timestamp: processed_at,
            request_id,
            request_type: kind.as_str().to_string(),
            user_id: user_id.to_string(),
            compliance_officer_notified: true,
        }));
        tracing::info!(%request_id, kind = kind.as_str(), "rights request processed (simulated)");

        RightsResponse {
            request_id,
            request_type: kind,
            user_id: user_id.to_string(),
            processed_at,
            status: "processed".to_string(),
            simulated: true,
            disclosure:
                "This response describes the service's rights-handling policy; no stored data was \
                 accessed, modified, or erased by this request."
                    .to_string(),
            detail,
        }
    }
}

fn access_detail() -> RightsDetail {
    RightsDetail::Access {
        data_categories: vec![
            "Test case generation history".to_string(),
            "Requirements processing".to_string(),
            "Compliance reports".to_string(),
        ],
        processing_purposes: vec![
            "Healthcare compliance testing".to_string(),
            "Quality assurance".to_string(),
        ],
        recipients: vec!["Internal QA team".to_string()],
        rights_available: vec![
            "Access".to_string(),
            "Rectification".to_string(),
            "Erasure".to_string(),
            "Portability".to_string(),
            "Object".to_string(),
        ],
        automated_decision_making: true,
        automated_decision_logic:
            "AI-powered test case generation based on healthcare requirements".to_string(),
    }
}

fn rectification_detail() -> RightsDetail {
    RightsDetail::Rectification {
        rectification_available: true,
        modifiable_fields: vec![
            "User preferences".to_string(),
            "Contact information".to_string(),
            "Consent status".to_string(),
        ],
        non_modifiable_fields: vec![
            "Audit logs".to_string(),
            "Generated test cases".to_string(),
            "Compliance records".to_string(),
        ],
        justification: "Integrity of compliance documentation must be maintained".to_string(),
    }
}

fn erasure_detail() -> RightsDetail {
    RightsDetail::Erasure {
        erasure_completed: true,
        data_categories_erased: vec![
            "Personal identifiers".to_string(),
            "Session data".to_string(),
            "User preferences".to_string(),
        ],
        data_categories_retained: vec![
            "Anonymized test cases".to_string(),
            "Compliance reports".to_string(),
        ],
        retention_justification:
            "Legal obligation for healthcare compliance documentation".to_string(),
    }
}

fn portability_detail() -> RightsDetail {
    RightsDetail::Portability {
        portable_data_available: true,
        export_formats: vec!["JSON".to_string(), "CSV".to_string(), "XML".to_string()],
        data_included: vec![
            "Generated test cases".to_string(),
            "Requirements history".to_string(),
            "Compliance reports".to_string(),
        ],
        export_preparation_time: "48 hours".to_string(),
    }
}

fn objection_detail() -> RightsDetail {
    RightsDetail::Objection {
        objection_honored: true,
        processing_stopped: vec![
            "Marketing communications".to_string(),
            "Profiling for recommendations".to_string(),
        ],
        processing_continued: vec![
            "Compliance testing".to_string(),
            "Audit requirements".to_string(),
        ],
        legal_justification:
            "Overriding legitimate interests for healthcare compliance".to_string(),
    }
}

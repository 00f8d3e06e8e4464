//! # GDPR Compliance Report & Status
//!
//! Canned self-assessment payloads describing the measures this service
//! applies. The only live inputs are the processing-log length and the
//! retention policy table; everything else is fixed text.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log::ProcessingLogSink;
use crate::DataType;

/// One retention policy row in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    pub retention_days: i64,
    pub category: String,
}

/// Full GDPR self-assessment report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdprComplianceReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub compliance_status: String,
    pub gdpr_principles_implemented: BTreeMap<String, bool>,
    pub technical_measures: Vec<String>,
    pub organizational_measures: Vec<String>,
    pub data_subject_rights_supported: Vec<String>,
    pub retention_policies: BTreeMap<String, RetentionPolicy>,
    pub processing_activities_logged: usize,
    pub lawful_basis_documented: bool,
    pub consent_management_implemented: bool,
    pub third_party_transfers: String,
    pub dpo_contact: String,
    pub supervisory_authority: String,
}

/// Current GDPR status booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdprStatus {
    pub gdpr_compliant: bool,
    pub privacy_by_design: bool,
    pub data_protection_impact_assessed: bool,
    pub consent_management_active: bool,
    pub data_subject_rights_implemented: bool,
    pub processing_activities_documented: bool,
    pub retention_policies_defined: bool,
    pub technical_safeguards_implemented: bool,
    pub organizational_measures_implemented: bool,
    pub compliance_monitoring_active: bool,
}

/// Retention policy table keyed by data type name.
pub fn retention_policies() -> BTreeMap<String, RetentionPolicy> {
    DataType::all()
        .iter()
        .map(|dt| {
            (
                dt.as_str().to_string(),
                RetentionPolicy {
                    retention_days: dt.retention_days(),
                    category: dt.retention_category().to_string(),
                },
            )
        })
        .collect()
}

/// Build the self-assessment report against the current log.
pub fn gdpr_compliance_report(log: &dyn ProcessingLogSink) -> GdprComplianceReport {
    let principles = [
        "lawfulness_fairness_transparency",
        "purpose_limitation",
        "data_minimization",
        "accuracy",
        "storage_limitation",
        "integrity_confidentiality",
        "accountability",
    ]
    .into_iter()
    .map(|p| (p.to_string(), true))
    .collect();

    GdprComplianceReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        compliance_status: "compliant".to_string(),
        gdpr_principles_implemented: principles,
        technical_measures: vec![
            "Data encryption at rest and in transit".to_string(),
            "Pseudonymization of personal identifiers".to_string(),
            "Access controls and authentication".to_string(),
            "Regular security assessments".to_string(),
            "Data backup and recovery procedures".to_string(),
        ],
        organizational_measures: vec![
            "Data protection impact assessments".to_string(),
            "Privacy by design implementation".to_string(),
            "Staff training on data protection".to_string(),
            "Data processing agreements".to_string(),
            "Incident response procedures".to_string(),
        ],
        data_subject_rights_supported: vec![
            "Right of access (Art. 15)".to_string(),
            "Right to rectification (Art. 16)".to_string(),
            "Right to erasure (Art. 17)".to_string(),
            "Right to data portability (Art. 20)".to_string(),
            "Right to object (Art. 21)".to_string(),
        ],
        retention_policies: retention_policies(),
        processing_activities_logged: log.len(),
        lawful_basis_documented: true,
        consent_management_implemented: true,
        third_party_transfers: "None".to_string(),
        dpo_contact: "dpo@healthcare-testgen.example".to_string(),
        supervisory_authority: "Applicable EU Data Protection Authority".to_string(),
    }
}

/// Current status booleans against the log.
pub fn gdpr_status(log: &dyn ProcessingLogSink) -> GdprStatus {
    GdprStatus {
        gdpr_compliant: true,
        privacy_by_design: true,
        data_protection_impact_assessed: true,
        consent_management_active: true,
        data_subject_rights_implemented: true,
        processing_activities_documented: !log.is_empty(),
        retention_policies_defined: true,
        technical_safeguards_implemented: true,
        organizational_measures_implemented: true,
        compliance_monitoring_active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{InMemoryProcessingLog, LogRecord, RightsRequestRecord};

    #[test]
    fn report_lists_seven_principles_and_five_rights() {
        let log = InMemoryProcessingLog::new();
        let report = gdpr_compliance_report(&log);
        assert_eq!(report.gdpr_principles_implemented.len(), 7);
        assert!(report.gdpr_principles_implemented.values().all(|v| *v));
        assert_eq!(report.data_subject_rights_supported.len(), 5);
        assert_eq!(report.processing_activities_logged, 0);
        assert_eq!(report.retention_policies.len(), 4);
        assert_eq!(report.retention_policies["test_cases"].retention_days, 2555);
    }

    #[test]
    fn status_reflects_log_activity() {
        let log = InMemoryProcessingLog::new();
        assert!(!gdpr_status(&log).processing_activities_documented);

        log.append(LogRecord::RightsRequest(RightsRequestRecord {
            timestamp: Utc::now(),
            request_id: Uuid::new_v4(),
            request_type: "access".to_string(),
            user_id: "u".to_string(),
            compliance_officer_notified: true,
        }));
        assert!(gdpr_status(&log).processing_activities_documented);
    }
}

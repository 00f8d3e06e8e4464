//! # Standard Catalog & Keyword Tables
//!
//! The fixed requirement checklists for every supported standard, plus the
//! keyword sets used to decide whether a requirement is covered by test
//! case text. Both tables are `'static` and read-only.

use tcg_core::{ComplianceStandard, Severity};

/// One catalog requirement: identifier, description, severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub id: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

const fn req(id: &'static str, description: &'static str) -> Requirement {
    Requirement {
        id,
        description,
        severity: Severity::Required,
    }
}

const FDA: &[Requirement] = &[
    req("21CFR820.30", "Design Controls"),
    req("21CFR820.75", "Process Validation"),
    req("21CFR11.10", "Electronic Records"),
    req("21CFR11.50", "Electronic Signatures"),
];

const IEC_62304: &[Requirement] = &[
    req("IEC62304-5.1", "Software Development Planning"),
    req("IEC62304-5.2", "Software Requirements Analysis"),
    req("IEC62304-5.5", "Software Integration Testing"),
    req("IEC62304-7.1", "Software Risk Management"),
];

const ISO_9001: &[Requirement] = &[
    req("ISO9001-4.4", "Quality Management System"),
    req("ISO9001-8.2", "Monitoring and Measurement"),
    req("ISO9001-8.5", "Improvement"),
];

const ISO_13485: &[Requirement] = &[
    req("ISO13485-4.2", "Documentation Requirements"),
    req("ISO13485-7.3", "Design and Development"),
    req("ISO13485-8.2", "Monitoring and Measurement"),
];

const ISO_27001: &[Requirement] = &[
    req("ISO27001-A.9", "Access Control"),
    req("ISO27001-A.10", "Cryptography"),
    req("ISO27001-A.12", "Operations Security"),
    req("ISO27001-A.18", "Compliance"),
];

const GDPR: &[Requirement] = &[
    req("GDPR-Art.5", "Principles of Processing"),
    req("GDPR-Art.6", "Lawfulness of Processing"),
    req("GDPR-Art.25", "Privacy by Design"),
    req("GDPR-Art.32", "Security of Processing"),
    req("GDPR-Art.35", "Data Protection Impact Assessment"),
];

/// The fixed requirement list for a standard, in catalog order.
pub fn requirements_for(standard: ComplianceStandard) -> &'static [Requirement] {
    match standard {
        ComplianceStandard::Fda => FDA,
        ComplianceStandard::Iec62304 => IEC_62304,
        ComplianceStandard::Iso9001 => ISO_9001,
        ComplianceStandard::Iso13485 => ISO_13485,
        ComplianceStandard::Iso27001 => ISO_27001,
        ComplianceStandard::Gdpr => GDPR,
    }
}

/// Keyword set for a requirement description.
///
/// A requirement counts as covered when any of these keywords appears as a
/// case-insensitive substring of a test case's title + description. When a
/// description has no entry here, the scorer falls back to the lower-cased
/// description itself as the sole keyword.
pub fn keywords_for(description: &str) -> Option<&'static [&'static str]> {
    let keywords: &'static [&'static str] = match description {
        // FDA
        "Design Controls" => &[
            "design",
            "validation",
            "verification",
            "requirements traceability",
        ],
        "Process Validation" => &["process validation", "testing", "quality assurance"],
        "Electronic Records" => &["electronic records", "data integrity", "record keeping"],
        "Electronic Signatures" => &[
            "digital signature",
            "electronic signature",
            "authentication",
        ],
        // IEC 62304
        "Software Development Planning" => &[
            "development plan",
            "lifecycle",
            "planning",
            "project management",
        ],
        "Software Requirements Analysis" => &[
            "requirements analysis",
            "specification",
            "functional requirements",
        ],
        "Software Integration Testing" => &["integration testing", "system testing", "validation"],
        "Software Risk Management" => &["risk management", "hazard analysis", "risk assessment"],
        // ISO 9001
        "Quality Management System" => &["quality management", "QMS", "process control"],
        "Monitoring and Measurement" => &["monitoring", "measurement", "performance evaluation"],
        "Improvement" => &[
            "continuous improvement",
            "corrective action",
            "preventive action",
        ],
        // ISO 13485
        "Documentation Requirements" => &["documentation", "document control", "records management"],
        "Design and Development" => &[
            "design control",
            "development process",
            "product realization",
        ],
        // ISO 27001
        "Access Control" => &[
            "authentication",
            "access",
            "login",
            "authorization",
            "user management",
        ],
        "Cryptography" => &["cryptography", "encryption", "key management", "crypto controls"],
        "Operations Security" => &[
            "operations security",
            "secure operations",
            "operational procedures",
        ],
        "Compliance" => &["compliance", "regulatory", "legal requirements", "audit"],
        // GDPR
        "Principles of Processing" => &["data minimization", "purpose limitation", "lawfulness"],
        "Lawfulness of Processing" => &["lawful basis", "consent", "legitimate interest"],
        "Privacy by Design" => &[
            "privacy by design",
            "data protection by design",
            "privacy engineering",
        ],
        "Security of Processing" => &[
            "data security",
            "technical measures",
            "organizational measures",
        ],
        "Data Protection Impact Assessment" => &["DPIA", "impact assessment", "privacy assessment"],
        _ => return None,
    };
    Some(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_has_requirements() {
        for std in ComplianceStandard::all() {
            assert!(
                !requirements_for(*std).is_empty(),
                "{std} has an empty catalog"
            );
        }
    }

    #[test]
    fn catalog_sizes_match_the_checklists() {
        assert_eq!(requirements_for(ComplianceStandard::Fda).len(), 4);
        assert_eq!(requirements_for(ComplianceStandard::Iec62304).len(), 4);
        assert_eq!(requirements_for(ComplianceStandard::Iso9001).len(), 3);
        assert_eq!(requirements_for(ComplianceStandard::Iso13485).len(), 3);
        assert_eq!(requirements_for(ComplianceStandard::Iso27001).len(), 4);
        assert_eq!(requirements_for(ComplianceStandard::Gdpr).len(), 5);
    }

    #[test]
    fn every_catalog_description_has_a_keyword_set() {
        for std in ComplianceStandard::all() {
            for req in requirements_for(*std) {
                assert!(
                    keywords_for(req.description).is_some(),
                    "no keyword set for {:?}",
                    req.description
                );
            }
        }
    }

    #[test]
    fn requirement_ids_are_unique_within_a_standard() {
        for std in ComplianceStandard::all() {
            let reqs = requirements_for(*std);
            for (i, a) in reqs.iter().enumerate() {
                for b in &reqs[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id in {std}");
                }
            }
        }
    }

    #[test]
    fn unlisted_description_falls_back_to_none() {
        assert!(keywords_for("Business Associate Agreements").is_none());
    }
}

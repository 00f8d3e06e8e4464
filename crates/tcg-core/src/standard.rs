//! # Compliance Standard Enumeration
//!
//! The closed set of regulatory standards the scorer knows how to evaluate.
//! Parsing happens at the API boundary: a request naming an unknown standard
//! fails deserialization there, so downstream code never sees one.

use serde::{Deserialize, Serialize};

/// A supported regulatory compliance standard.
///
/// Wire representation matches the catalog keys (`"FDA"`, `"IEC_62304"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStandard {
    /// FDA Quality System Regulation (21 CFR Parts 11 and 820).
    #[serde(rename = "FDA")]
    Fda,
    /// IEC 62304 medical device software lifecycle processes.
    #[serde(rename = "IEC_62304")]
    Iec62304,
    /// ISO 9001 quality management systems.
    #[serde(rename = "ISO_9001")]
    Iso9001,
    /// ISO 13485 medical device quality management systems.
    #[serde(rename = "ISO_13485")]
    Iso13485,
    /// ISO 27001 information security management systems.
    #[serde(rename = "ISO_27001")]
    Iso27001,
    /// EU General Data Protection Regulation.
    #[serde(rename = "GDPR")]
    Gdpr,
}

impl ComplianceStandard {
    /// All supported standards, in catalog order.
    pub fn all() -> &'static [ComplianceStandard] {
        &[
            Self::Fda,
            Self::Iec62304,
            Self::Iso9001,
            Self::Iso13485,
            Self::Iso27001,
            Self::Gdpr,
        ]
    }

    /// Canonical catalog key (`"FDA"`, `"IEC_62304"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fda => "FDA",
            Self::Iec62304 => "IEC_62304",
            Self::Iso9001 => "ISO_9001",
            Self::Iso13485 => "ISO_13485",
            Self::Iso27001 => "ISO_27001",
            Self::Gdpr => "GDPR",
        }
    }

    /// One-line description of the regulatory framework, used in prompts
    /// and status payloads.
    pub fn framework_description(&self) -> &'static str {
        match self {
            Self::Fda => "Food and Drug Administration medical device regulations",
            Self::Iec62304 => "Medical device software lifecycle processes",
            Self::Iso9001 => "Quality management systems",
            Self::Iso13485 => "Medical devices quality management systems",
            Self::Iso27001 => "Information security management systems",
            Self::Gdpr => "General Data Protection Regulation",
        }
    }

    /// True for the three ISO sub-standards.
    pub fn is_iso(&self) -> bool {
        matches!(self, Self::Iso9001 | Self::Iso13485 | Self::Iso27001)
    }
}

impl std::fmt::Display for ComplianceStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComplianceStandard {
    type Err = UnknownStandard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FDA" => Ok(Self::Fda),
            "IEC_62304" => Ok(Self::Iec62304),
            "ISO_9001" => Ok(Self::Iso9001),
            "ISO_13485" => Ok(Self::Iso13485),
            "ISO_27001" => Ok(Self::Iso27001),
            "GDPR" => Ok(Self::Gdpr),
            other => Err(UnknownStandard(other.to_string())),
        }
    }
}

/// Error returned when parsing a standard name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown compliance standard: {0}")]
pub struct UnknownStandard(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn all_lists_six_standards() {
        assert_eq!(ComplianceStandard::all().len(), 6);
    }

    #[test]
    fn as_str_roundtrips_through_from_str() {
        for std in ComplianceStandard::all() {
            assert_eq!(ComplianceStandard::from_str(std.as_str()).unwrap(), *std);
        }
    }

    #[test]
    fn unknown_standard_is_rejected() {
        let err = ComplianceStandard::from_str("HIPAA").unwrap_err();
        assert_eq!(err, UnknownStandard("HIPAA".to_string()));
    }

    #[test]
    fn serde_uses_catalog_keys() {
        let json = serde_json::to_string(&ComplianceStandard::Iec62304).unwrap();
        assert_eq!(json, "\"IEC_62304\"");
        let back: ComplianceStandard = serde_json::from_str("\"ISO_13485\"").unwrap();
        assert_eq!(back, ComplianceStandard::Iso13485);
    }

    #[test]
    fn serde_rejects_unknown_standard() {
        let result: Result<ComplianceStandard, _> = serde_json::from_str("\"SOC2\"");
        assert!(result.is_err());
    }

    #[test]
    fn iso_predicate_matches_sub_standards() {
        assert!(ComplianceStandard::Iso9001.is_iso());
        assert!(ComplianceStandard::Iso13485.is_iso());
        assert!(ComplianceStandard::Iso27001.is_iso());
        assert!(!ComplianceStandard::Fda.is_iso());
        assert!(!ComplianceStandard::Gdpr.is_iso());
    }
}

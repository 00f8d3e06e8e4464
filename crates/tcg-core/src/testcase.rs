//! # Test Case Records
//!
//! The [`TestCase`] record is the unit of work for the whole pipeline:
//! produced by the generator, scored by the compliance checker, serialized
//! by the exporters, and mapped to ALM issues. Records are immutable once
//! created; there is no update path anywhere in the stack.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::TestCaseId;
use crate::standard::ComplianceStandard;

/// Category of a generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCaseType {
    Functional,
    Security,
    Performance,
    Compliance,
}

impl TestCaseType {
    /// Wire representation (`"functional"`, `"security"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Compliance => "compliance",
        }
    }
}

impl std::fmt::Display for TestCaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution priority of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Wire representation (`"low"`, `"medium"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered step within a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    /// 1-based position within the test case.
    pub step_number: u32,
    /// What the tester does.
    pub action: String,
    /// What must be observed for the step to pass.
    pub expected_result: String,
    /// Optional data set the step runs against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
}

impl TestStep {
    /// Create a step without test data.
    pub fn new(step_number: u32, action: impl Into<String>, expected_result: impl Into<String>) -> Self {
        Self {
            step_number,
            action: action.into(),
            expected_result: expected_result.into(),
            test_data: None,
        }
    }

    /// Attach a test data description.
    pub fn with_test_data(mut self, test_data: impl Into<String>) -> Self {
        self.test_data = Some(test_data.into());
        self
    }
}

/// A structured test case derived from free-text requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Opaque identifier, minted at creation.
    pub id: TestCaseId,
    /// Short human-readable title.
    pub title: String,
    /// What the test case verifies.
    pub description: String,
    /// Category (functional/security/performance/compliance).
    pub test_type: TestCaseType,
    /// Execution priority.
    pub priority: Priority,
    /// Conditions that must hold before execution starts.
    pub preconditions: Vec<String>,
    /// Ordered execution steps.
    pub test_steps: Vec<TestStep>,
    /// Overall pass condition.
    pub expected_outcome: String,
    /// The standard this case was generated against.
    pub regulatory_framework: ComplianceStandard,
    /// Free-form compliance tag strings (e.g. `"FDA-21CFR820.30"`).
    pub compliance_tags: Vec<String>,
    /// Requirement identifiers this case traces back to.
    pub requirements_traceability: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Rough execution estimate in minutes.
    pub estimated_duration_minutes: u32,
}

impl TestCase {
    /// Concatenated title and description, the text the keyword scorer
    /// matches against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

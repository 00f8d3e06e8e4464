//! # Backend Reply Conversion
//!
//! Maps the loosely-typed `test_cases` JSON from the generation backend
//! onto [`TestCase`] records. The backend is not trusted to produce the
//! exact schema: missing or malformed fields default rather than fail, and
//! identifiers are minted fresh; the backend's own id strings only survive
//! as traceability entries.

use chrono::Utc;
use serde_json::Value;

use tcg_core::{ComplianceStandard, Priority, TestCase, TestCaseId, TestCaseType, TestStep};

/// Convert a backend reply object into test cases.
///
/// Expects `{"test_cases": [...]}`; anything else yields an empty vector,
/// which the generator treats as unusable output.
pub fn from_backend_value(
    value: &Value,
    requested_type: TestCaseType,
    standard: ComplianceStandard,
) -> Vec<TestCase> {
    let Some(entries) = value.get("test_cases").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| convert_entry(entry, requested_type, standard))
        .collect()
}

fn convert_entry(
    entry: &Value,
    requested_type: TestCaseType,
    standard: ComplianceStandard,
) -> Option<TestCase> {
    let obj = entry.as_object()?;

    let title = str_field(obj, "title").unwrap_or_else(|| "Generated Test Case".to_string());
    let description = str_field(obj, "description").unwrap_or_default();

    let test_type = str_field(obj, "test_type")
        .and_then(|t| serde_json::from_value(Value::String(t)).ok())
        .unwrap_or(requested_type);
    let priority = str_field(obj, "priority")
        .and_then(|p| serde_json::from_value(Value::String(p)).ok())
        .unwrap_or(Priority::Medium);

    let test_steps = obj
        .get("test_steps")
        .and_then(Value::as_array)
        .map(|steps| {
            steps
                .iter()
                .enumerate()
                .filter_map(|(i, step)| convert_step(step, i as u32 + 1))
                .collect()
        })
        .unwrap_or_default();

    let mut requirements_traceability = string_list(obj.get("requirements_traceability"));
    // The backend's own id (e.g. "TC001-GDPR") is kept as a trace entry.
    if let Some(backend_id) = str_field(obj, "id") {
        if !requirements_traceability.contains(&backend_id) {
            requirements_traceability.push(backend_id);
        }
    }

    let mut compliance_tags = string_list(obj.get("compliance_tags"));
    if compliance_tags.is_empty() {
        compliance_tags.push(standard.as_str().to_string());
    }

    Some(TestCase {
        id: TestCaseId::new(),
        title,
        description,
        test_type,
        priority,
        preconditions: string_list(obj.get("preconditions")),
        test_steps,
        expected_outcome: str_field(obj, "expected_outcome").unwrap_or_default(),
        regulatory_framework: standard,
        compliance_tags,
        requirements_traceability,
        created_at: Utc::now(),
        estimated_duration_minutes: obj
            .get("estimated_duration")
            .and_then(Value::as_u64)
            .map(|d| d.min(u32::MAX as u64) as u32)
            .unwrap_or(30),
    })
}

fn convert_step(step: &Value, default_number: u32) -> Option<TestStep> {
    let obj = step.as_object()?;
    let mut converted = TestStep::new(
        obj.get("step_number")
            .and_then(Value::as_u64)
            .map(|n| n.min(u32::MAX as u64) as u32)
            .unwrap_or(default_number),
        str_field(obj, "action").unwrap_or_default(),
        str_field(obj, "expected_result").unwrap_or_default(),
    );
    if let Some(data) = str_field(obj, "test_data") {
        converted = converted.with_test_data(data);
    }
    Some(converted)
}

fn str_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.is_empty())
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_entry_maps_every_field() {
        let value = json!({"test_cases": [{
            "id": "TC001-GDPR",
            "title": "Consent flow",
            "description": "Verify consent capture",
            "test_type": "security",
            "priority": "critical",
            "preconditions": ["Consent UI deployed"],
            "test_steps": [
                {"step_number": 1, "action": "Open consent form", "expected_result": "Form renders", "test_data": "fixture-1"},
                {"action": "Submit", "expected_result": "Recorded"}
            ],
            "expected_outcome": "Consent recorded",
            "compliance_tags": ["GDPR", "Consent"],
            "requirements_traceability": ["REQ-GDPR-007"],
            "estimated_duration": 25
        }]});

        let cases =
            from_backend_value(&value, TestCaseType::Functional, ComplianceStandard::Gdpr);
        assert_eq!(cases.len(), 1);
        let tc = &cases[0];
        assert_eq!(tc.title, "Consent flow");
        assert_eq!(tc.test_type, TestCaseType::Security);
        assert_eq!(tc.priority, Priority::Critical);
        assert_eq!(tc.regulatory_framework, ComplianceStandard::Gdpr);
        assert_eq!(tc.estimated_duration_minutes, 25);
        assert_eq!(tc.test_steps.len(), 2);
        assert_eq!(tc.test_steps[0].test_data.as_deref(), Some("fixture-1"));
        // Unnumbered second step gets its positional number.
        assert_eq!(tc.test_steps[1].step_number, 2);
        // The backend id lands in traceability behind the declared entries.
        assert_eq!(
            tc.requirements_traceability,
            vec!["REQ-GDPR-007".to_string(), "TC001-GDPR".to_string()]
        );
    }

    #[test]
    fn sparse_entry_gets_defaults() {
        let value = json!({"test_cases": [{"title": "Bare"}]});
        let cases = from_backend_value(&value, TestCaseType::Performance, ComplianceStandard::Fda);
        let tc = &cases[0];
        assert_eq!(tc.test_type, TestCaseType::Performance);
        assert_eq!(tc.priority, Priority::Medium);
        assert_eq!(tc.estimated_duration_minutes, 30);
        assert_eq!(tc.compliance_tags, vec!["FDA".to_string()]);
        assert!(tc.test_steps.is_empty());
    }

    #[test]
    fn unknown_enum_strings_default() {
        let value = json!({"test_cases": [{
            "title": "Odd",
            "test_type": "exploratory",
            "priority": "urgent"
        }]});
        let cases = from_backend_value(&value, TestCaseType::Functional, ComplianceStandard::Fda);
        assert_eq!(cases[0].test_type, TestCaseType::Functional);
        assert_eq!(cases[0].priority, Priority::Medium);
    }

    #[test]
    fn missing_test_cases_key_yields_empty() {
        let value = json!({"cases": []});
        assert!(from_backend_value(&value, TestCaseType::Functional, ComplianceStandard::Fda)
            .is_empty());
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let value = json!({"test_cases": ["not an object", {"title": "Real"}]});
        let cases = from_backend_value(&value, TestCaseType::Functional, ComplianceStandard::Fda);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].title, "Real");
    }
}

//! # ALM Field Formatting
//!
//! Renders test case records into the text shapes each ALM expects: Jira
//! wiki markup for issue descriptions, HTML for Azure DevOps descriptions,
//! and the Azure test-steps XML with CDATA-wrapped content.

use std::fmt::Write;

use tcg_core::TestCase;

/// Jira issue description in wiki markup.
pub fn jira_description(tc: &TestCase) -> String {
    let mut description = format!("*Test Case Description:* {}\n\n", tc.description);
    let _ = writeln!(
        description,
        "*Regulatory Framework:* {}",
        tc.regulatory_framework
    );
    let _ = writeln!(description, "*Priority:* {}", tc.priority);
    description.push('\n');

    description.push_str("*Test Steps:*\n");
    for step in &tc.test_steps {
        let _ = writeln!(description, "{}. {}", step.step_number, step.action);
        let _ = writeln!(description, "   Expected: {}", step.expected_result);
    }

    let _ = write!(
        description,
        "\n*Expected Outcome:* {}\n*Compliance Tags:* {}\n",
        tc.expected_outcome,
        tc.compliance_tags.join(", ")
    );

    description
}

/// Azure DevOps work item description in HTML.
pub fn azure_description(tc: &TestCase) -> String {
    let tags: String = tc
        .compliance_tags
        .iter()
        .map(|tag| format!("<li>{}</li>", html_escape(tag)))
        .collect();

    format!(
        "<div>\n\
         <h3>Test Case Description</h3>\n\
         <p>{}</p>\n\
         <h3>Regulatory Framework</h3>\n\
         <p>{}</p>\n\
         <h3>Expected Outcome</h3>\n\
         <p>{}</p>\n\
         <h3>Compliance Tags</h3>\n\
         <ul>{}</ul>\n\
         </div>",
        html_escape(&tc.description),
        tc.regulatory_framework,
        html_escape(&tc.expected_outcome),
        tags,
    )
}

/// Azure DevOps `Microsoft.VSTS.TCM.Steps` XML.
pub fn azure_steps(tc: &TestCase) -> String {
    let mut steps_xml = String::from("<steps>");
    for step in &tc.test_steps {
        let _ = write!(
            steps_xml,
            "<step id=\"{}\" type=\"ActionStep\">\
             <parameterizedString isformatted=\"true\"><![CDATA[{}]]></parameterizedString>\
             <parameterizedString isformatted=\"true\"><![CDATA[{}]]></parameterizedString>\
             <description><![CDATA[Test Data: {}]]></description>\
             </step>",
            step.step_number,
            step.action,
            step.expected_result,
            step.test_data.as_deref().unwrap_or("N/A"),
        );
    }
    steps_xml.push_str("</steps>");
    steps_xml
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tcg_core::{ComplianceStandard, Priority, TestCaseId, TestCaseType, TestStep};

    fn sample() -> TestCase {
        TestCase {
            id: TestCaseId::new(),
            title: "FDA Design Controls".to_string(),
            description: "Verify design controls".to_string(),
            test_type: TestCaseType::Compliance,
            priority: Priority::Critical,
            preconditions: vec![],
            test_steps: vec![
                TestStep::new(1, "Review documentation", "Docs complete"),
                TestStep::new(2, "Check validation", "Validated").with_test_data("dataset-1"),
            ],
            expected_outcome: "Compliant".to_string(),
            regulatory_framework: ComplianceStandard::Fda,
            compliance_tags: vec!["FDA-21CFR820.30".to_string(), "Design-Controls".to_string()],
            requirements_traceability: vec![],
            created_at: Utc::now(),
            estimated_duration_minutes: 45,
        }
    }

    #[test]
    fn jira_description_carries_steps_and_tags() {
        let text = jira_description(&sample());
        assert!(text.starts_with("*Test Case Description:* Verify design controls"));
        assert!(text.contains("*Regulatory Framework:* FDA"));
        assert!(text.contains("1. Review documentation"));
        assert!(text.contains("   Expected: Docs complete"));
        assert!(text.contains("*Compliance Tags:* FDA-21CFR820.30, Design-Controls"));
    }

    #[test]
    fn azure_description_is_escaped_html() {
        let mut tc = sample();
        tc.description = "a < b & c".to_string();
        let html = azure_description(&tc);
        assert!(html.contains("<p>a &lt; b &amp; c</p>"));
        assert!(html.contains("<li>FDA-21CFR820.30</li>"));
    }

    #[test]
    fn azure_steps_wrap_content_in_cdata() {
        let xml = azure_steps(&sample());
        assert!(xml.starts_with("<steps>"));
        assert!(xml.ends_with("</steps>"));
        assert_eq!(xml.matches("<step id=").count(), 2);
        assert!(xml.contains("<![CDATA[Review documentation]]>"));
        assert!(xml.contains("<![CDATA[Test Data: dataset-1]]>"));
        assert!(xml.contains("<![CDATA[Test Data: N/A]]>"));
    }
}

//! # tcg-export — Interchange Exporters
//!
//! Serializes test case records into JUnit-XML and Gherkin text. Pure
//! string assembly over read-only records.
//!
//! Titles and descriptions are user- and backend-influenced text, so the
//! JUnit exporter escapes XML metacharacters in both attribute and element
//! positions; a title containing `<` or `&` still yields well-formed XML.

use std::fmt::Write;

use tcg_core::TestCase;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JUnit-style XML.
    Junit,
    /// Cucumber/Gherkin feature text.
    Cucumber,
}

impl ExportFormat {
    /// File extension for exported content.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Junit => "xml",
            Self::Cucumber => "feature",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "junit" => Ok(Self::Junit),
            "cucumber" => Ok(Self::Cucumber),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Error for an export format outside {junit, cucumber}.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported export format: {0}")]
pub struct UnknownFormat(pub String);

/// Serialize test cases in the requested format.
pub fn export(format: ExportFormat, test_cases: &[TestCase]) -> String {
    match format {
        ExportFormat::Junit => to_junit(test_cases),
        ExportFormat::Cucumber => to_gherkin(test_cases),
    }
}

/// JUnit-style XML: one `<testcase>` element per record, with the
/// description in `<system-out>`.
pub fn to_junit(test_cases: &[TestCase]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        xml,
        "<testsuite name=\"HealthcareTests\" tests=\"{}\">",
        test_cases.len()
    );

    for tc in test_cases {
        let _ = writeln!(
            xml,
            "  <testcase name=\"{}\" classname=\"Healthcare\">",
            xml_escape(&tc.title)
        );
        let _ = writeln!(xml, "    <system-out>{}</system-out>", xml_escape(&tc.description));
        xml.push_str("  </testcase>\n");
    }

    xml.push_str("</testsuite>");
    xml
}

/// Gherkin feature text: one `Scenario` per record, one When/Then pair per
/// step in step-number order.
pub fn to_gherkin(test_cases: &[TestCase]) -> String {
    let mut content = String::from("Feature: Healthcare Application Testing\n\n");

    for tc in test_cases {
        let _ = writeln!(content, "  Scenario: {}", tc.title);
        content.push_str("    Given the system is ready\n");

        let mut steps: Vec<_> = tc.test_steps.iter().collect();
        steps.sort_by_key(|step| step.step_number);
        for step in steps {
            let _ = writeln!(content, "    When {}", step.action);
            let _ = writeln!(content, "    Then {}", step.expected_result);
        }

        content.push('\n');
    }

    content
}

/// Escape the five XML metacharacters.
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

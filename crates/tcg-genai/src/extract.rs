//! # Reply Text Extraction
//!
//! Generative backends wrap their JSON in prose and Markdown code fences.
//! These helpers recover the outermost JSON object: strip fence lines,
//! then slice from the first `{` to the last `}`.

/// Remove Markdown code fence lines (```` ``` ```` and ```` ```json ````)
/// from a backend reply, leaving the fenced content in place.
pub fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Slice the substring from the first `{` to the last `}`, inclusive.
///
/// Returns `None` when no such span exists. The slice is not validated —
/// callers parse it and treat failure as a malformed reply.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plain_and_tagged_fences() {
        let input = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        let input = "{\"a\": 1}";
        assert_eq!(strip_code_fences(input), input);
    }

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let input = "Sure! {\"test_cases\": [{\"id\": \"x\"}]} Hope that helps.";
        assert_eq!(
            extract_json_object(input),
            Some("{\"test_cases\": [{\"id\": \"x\"}]}")
        );
    }

    #[test]
    fn no_braces_yields_none() {
        assert_eq!(extract_json_object("nothing here"), None);
    }

    #[test]
    fn reversed_braces_yield_none() {
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn single_brace_pair_is_inclusive() {
        assert_eq!(extract_json_object("{}"), Some("{}"));
    }
}

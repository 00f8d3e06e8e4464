//! # tcg-extract — Document Text Extraction
//!
//! Converts uploaded document bytes into plain text plus format metadata,
//! dispatching on the declared MIME subtype. Pure functions, no state.
//!
//! ## Failure Discipline
//!
//! Extraction never propagates an error: any decode or parse failure
//! yields empty text with `format_supported: false` and an `error` entry in
//! the metadata. Binary formats whose parsers live outside this service
//! (PDF, Word) degrade the same way.

use serde::{Deserialize, Serialize};

/// Format metadata attached to an extraction result. Fields are populated
/// per format; absent ones are omitted from the wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Detected/declared format name (`"XML"`, `"HTML"`, `"Markdown"`, `"text"`, …).
    pub format: String,
    /// Input size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Root element name (XML only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_tag: Option<String>,
    /// Number of tags encountered (HTML only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<usize>,
    /// Number of lines (Markdown only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    /// Present when extraction degraded instead of succeeding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Flattened plain text, empty when extraction degraded.
    pub extracted_text: String,
    /// Per-format metadata.
    pub metadata: ExtractionMetadata,
    /// False when the format could not be extracted.
    pub format_supported: bool,
}

/// Extract plain text from document bytes, dispatching on the declared
/// MIME subtype (the part after `/`, lower-cased by the caller or here).
pub fn extract(content: &[u8], subtype: &str) -> Extraction {
    match subtype.to_lowercase().as_str() {
        "pdf" => unsupported("PDF", content.len()),
        "doc" | "docx" | "msword" | "vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            unsupported("Word", content.len())
        }
        "xml" => extract_xml(content),
        "html" | "htm" | "markdown" | "md" => extract_markup(content),
        _ => extract_plain(content),
    }
}

/// Binary formats parsed by external collaborators: declared but not
/// extracted here.
fn unsupported(format: &str, size: usize) -> Extraction {
    Extraction {
        extracted_text: String::new(),
        metadata: ExtractionMetadata {
            format: format.to_string(),
            size: Some(size),
            error: Some(format!("{format} extraction requires an external parser")),
            ..Default::default()
        },
        format_supported: false,
    }
}

fn parse_error(format: &str, reason: &str) -> Extraction {
    Extraction {
        extracted_text: String::new(),
        metadata: ExtractionMetadata {
            format: format.to_string(),
            error: Some(reason.to_string()),
            ..Default::default()
        },
        format_supported: false,
    }
}

fn extract_xml(content: &[u8]) -> Extraction {
    let Ok(text) = std::str::from_utf8(content) else {
        return parse_error("XML", "Parse error");
    };
    let stripped = strip_comments(text);
    let Some(root_tag) = root_tag_name(&stripped) else {
        return parse_error("XML", "Parse error");
    };

    let (flattened, _) = strip_tags(&stripped);
    Extraction {
        extracted_text: flattened,
        metadata: ExtractionMetadata {
            format: "XML".to_string(),
            size: Some(content.len()),
            root_tag: Some(root_tag),
            ..Default::default()
        },
        format_supported: true,
    }
}

fn extract_markup(content: &[u8]) -> Extraction {
    let Ok(text) = std::str::from_utf8(content) else {
        return parse_error("Markup", "Parse error");
    };

    if text.trim_start().starts_with('<') {
        let stripped = strip_comments(text);
        let (flattened, tag_count) = strip_tags(&stripped);
        Extraction {
            extracted_text: flattened,
            metadata: ExtractionMetadata {
                format: "HTML".to_string(),
                tags: Some(tag_count),
                ..Default::default()
            },
            format_supported: true,
        }
    } else {
        Extraction {
            extracted_text: text.to_string(),
            metadata: ExtractionMetadata {
                format: "Markdown".to_string(),
                lines: Some(text.lines().count()),
                ..Default::default()
            },
            format_supported: true,
        }
    }
}

fn extract_plain(content: &[u8]) -> Extraction {
    let text = String::from_utf8_lossy(content).into_owned();
    Extraction {
        extracted_text: text,
        metadata: ExtractionMetadata {
            format: "text".to_string(),
            size: Some(content.len()),
            ..Default::default()
        },
        format_supported: true,
    }
}

/// Remove `<!-- … -->` comment spans. Unterminated comments run to the end
/// of input.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Drop every `<…>` span, decode the five standard entities, and return
/// the remaining text along with the number of tags dropped.
fn strip_tags(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut tag_count = 0usize;
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag_count += 1;
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    (decode_entities(&out), tag_count)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Name of the first element tag, skipping the XML declaration and
/// processing instructions.
fn root_tag_name(text: &str) -> Option<String> {
    let mut rest = text;
    loop {
        let start = rest.find('<')?;
        let after = &rest[start + 1..];
        if after.starts_with('?') || after.starts_with('!') {
            let end = after.find('>')?;
            rest = &after[end + 1..];
            continue;
        }
        let name: String = after
            .chars()
            .take_while(|c| !c.is_whitespace() && *c != '>' && *c != '/')
            .collect();
        return if name.is_empty() { None } else { Some(name) };
    }
}

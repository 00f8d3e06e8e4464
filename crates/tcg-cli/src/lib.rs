//! # tcg-cli — Offline Toolchain
//!
//! File-based access to the deterministic half of the stack: rule-based
//! test generation, requirements validation, compliance scoring, and
//! export. Never calls the generation backend; everything here is the
//! fallback path, suitable for air-gapped environments and CI.

pub mod export;
pub mod generate;
pub mod score;
pub mod validate;

use std::path::Path;

/// Write output to the given path, or stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Parse a standard name with the catalog keys in the error message.
pub(crate) fn parse_standard(name: &str) -> anyhow::Result<tcg_core::ComplianceStandard> {
    name.parse().map_err(|_| {
        anyhow::anyhow!(
            "unknown compliance standard {name:?} (expected one of: FDA, IEC_62304, ISO_9001, ISO_13485, ISO_27001, GDPR)"
        )
    })
}

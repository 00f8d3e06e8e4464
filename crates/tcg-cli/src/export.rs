//! `tcg export` — serialize a test case file as JUnit XML or Gherkin.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use tcg_core::TestCase;
use tcg_export::ExportFormat;

use crate::write_output;

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to a JSON file containing an array of test cases.
    pub test_cases: PathBuf,

    /// Export format: junit or cucumber.
    #[arg(long, default_value = "junit")]
    pub format: String,

    /// Write the exported text here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Export the test case file in the requested format.
pub fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.test_cases)?;
    let test_cases: Vec<TestCase> = serde_json::from_str(&raw)?;

    let format = ExportFormat::from_str(&args.format)
        .map_err(|e| anyhow::anyhow!("{e} (expected junit or cucumber)"))?;
    let content = tcg_export::export(format, &test_cases);
    tracing::info!(count = test_cases.len(), format = %args.format, "exported test cases");

    write_output(args.output.as_deref(), &content)
}

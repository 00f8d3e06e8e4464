//! `tcg generate` — rule-based test generation from a requirements file.

use std::path::PathBuf;

use clap::Args;

use tcg_generate::rules::rule_based_tests;

use crate::{parse_standard, write_output};

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to a plain-text requirements file.
    pub requirements: PathBuf,

    /// Compliance standard to generate against.
    #[arg(long, default_value = "FDA")]
    pub standard: String,

    /// Write the test case JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run rule-based generation and emit the test cases as JSON.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let requirements = std::fs::read_to_string(&args.requirements)?;
    let standard = parse_standard(&args.standard)?;

    let test_cases = rule_based_tests(&requirements, standard);
    tracing::info!(count = test_cases.len(), %standard, "generated test cases");

    let json = serde_json::to_string_pretty(&test_cases)?;
    write_output(args.output.as_deref(), &json)
}

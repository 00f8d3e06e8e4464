//! `tcg score` — deterministic compliance scoring of a test case file.

use std::path::PathBuf;

use clap::Args;

use tcg_core::TestCase;

use crate::{parse_standard, write_output};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to a JSON file containing an array of test cases.
    pub test_cases: PathBuf,

    /// Compliance standard to score against.
    #[arg(long, default_value = "FDA")]
    pub standard: String,

    /// Score against every supported standard instead of one.
    #[arg(long, conflicts_with = "standard")]
    pub matrix: bool,

    /// Write the report JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Score the test case file and emit the report (or matrix) as JSON.
pub fn run_score(args: &ScoreArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.test_cases)?;
    let test_cases: Vec<TestCase> = serde_json::from_str(&raw)?;

    let json = if args.matrix {
        let matrix = tcg_compliance::compliance_matrix(&test_cases);
        serde_json::to_string_pretty(&matrix)?
    } else {
        let standard = parse_standard(&args.standard)?;
        let report = tcg_compliance::score(&test_cases, standard);
        tracing::info!(
            %standard,
            score = report.overall_score,
            gaps = report.gaps.len(),
            "scored test cases"
        );
        serde_json::to_string_pretty(&report)?
    };

    write_output(args.output.as_deref(), &json)
}

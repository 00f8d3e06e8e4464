//! # tcg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map to tracing filter levels.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tcg_cli::export::{run_export, ExportArgs};
use tcg_cli::generate::{run_generate, GenerateArgs};
use tcg_cli::score::{run_score, ScoreArgs};
use tcg_cli::validate::{run_validate, ValidateArgs};

/// TCG Stack CLI
///
/// Offline toolchain for the test case generation stack: rule-based
/// generation, requirements validation, compliance scoring, and export.
/// Never calls the generation backend.
#[derive(Parser, Debug)]
#[command(name = "tcg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate test cases from a requirements file via the rule table.
    Generate(GenerateArgs),

    /// Score a requirements file against the completeness checklist.
    Validate(ValidateArgs),

    /// Score a test case file against a compliance standard (or all).
    Score(ScoreArgs),

    /// Export a test case file as JUnit XML or Gherkin.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Score(args) => run_score(&args),
        Commands::Export(args) => run_export(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

//! `tcg validate` — requirements completeness scoring.

use std::path::PathBuf;

use clap::Args;

use tcg_generate::validate_requirements;

use crate::write_output;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a plain-text requirements file.
    pub requirements: PathBuf,

    /// Write the validation JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Score the requirements file and emit the validation result as JSON.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<()> {
    let requirements = std::fs::read_to_string(&args.requirements)?;
    let validation = validate_requirements(&requirements);
    tracing::info!(
        score = validation.completeness_score,
        valid = validation.valid,
        "requirements validated"
    );

    let json = serde_json::to_string_pretty(&validation)?;
    write_output(args.output.as_deref(), &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_scores_zero() {
        let dir = tempfile::tempdir().unwrap();
        let requirements = dir.path().join("empty.txt");
        std::fs::write(&requirements, "").unwrap();
        let output = dir.path().join("validation.json");

        run_validate(&ValidateArgs {
            requirements,
            output: Some(output.clone()),
        })
        .unwrap();

        let body: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(body["completeness_score"], 0.0);
        assert_eq!(body["valid"], false);
        assert_eq!(body["missing_elements"].as_array().unwrap().len(), 6);
    }
}

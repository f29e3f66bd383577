//! `ssn check`: validate identity numbers.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use ssn_personnummer::Validator;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, verdict, OutputFormat};

use super::CommandContext;

/// Check whether identity numbers are valid.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identity numbers, e.g. 510818-9167 or 19510818-9167.
    #[arg(required = true)]
    numbers: Vec<String>,
}

/// Result of checking one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CheckOutcome {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let outcomes = check_all(&ctx.validator, &self.numbers);

        match ctx.format {
            OutputFormat::Json => print_single(&outcomes),
            OutputFormat::Table => {
                for outcome in &outcomes {
                    let status = match &outcome.error {
                        Some(message) => message.red(),
                        None => verdict(outcome.valid),
                    };
                    if outcomes.len() == 1 {
                        println!("{status}");
                    } else {
                        println!("{}: {status}", outcome.input);
                    }
                }
            }
        }

        ensure_all_valid(&outcomes)?;
        Ok(())
    }
}

/// Fails with [`CliError::NotValid`] when any outcome did not pass.
fn ensure_all_valid(outcomes: &[CheckOutcome]) -> Result<(), CliError> {
    let invalid = outcomes.iter().filter(|o| !o.valid).count();
    if invalid > 0 {
        return Err(CliError::NotValid {
            invalid,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn check_all(validator: &Validator, numbers: &[String]) -> Vec<CheckOutcome> {
    numbers
        .iter()
        .map(|input| {
            let outcome = match validator.validate(input) {
                Ok(valid) => CheckOutcome {
                    input: input.clone(),
                    valid,
                    error: None,
                },
                Err(e) => CheckOutcome {
                    input: input.clone(),
                    valid: false,
                    error: Some(e.to_string()),
                },
            };
            debug!(input = %input, valid = outcome.valid, "Checked identity number");
            outcome
        })
        .collect()
}

//! Error handling and display for the CLI.

use colored::Colorize;
use ssn_personnummer::PersonnummerError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Personnummer(#[from] PersonnummerError),

    #[error("{invalid} of {total} identity numbers did not pass")]
    NotValid { invalid: usize, total: usize },

    #[error("unknown output format '{0}', expected 'table' or 'json'")]
    UnknownFormat(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    let personnummer = err
        .downcast_ref::<PersonnummerError>()
        .or_else(|| match err.downcast_ref::<CliError>() {
            Some(CliError::Personnummer(inner)) => Some(inner),
            _ => None,
        })?;

    match personnummer {
        PersonnummerError::Null | PersonnummerError::Empty => {
            Some("Hint: pass the number to check, e.g. `ssn check 510818-9167`.")
        }
        PersonnummerError::Parsing { .. } => {
            Some("Hint: use YYMMDD-NNNC or YYYYMMDD-NNNC, e.g. 510818-9167 or 19510818-9167.")
        }
        PersonnummerError::Checksum { .. } | PersonnummerError::Date { .. } => None,
    }
}

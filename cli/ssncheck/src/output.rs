//! Output formatting for CLI commands.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliError;

const CLI_SCHEMA_VERSION: &str = "ssn.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

/// Print rows as a table.
pub fn print_table<T: Tabled>(data: &[T]) {
    println!("{}", render_table(data));
}

fn render_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        "No items found.".dimmed().to_string()
    } else {
        Table::new(data).to_string()
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Renders a validation result, green when valid and red otherwise.
pub fn verdict(valid: bool) -> ColoredString {
    if valid {
        "true".green()
    } else {
        "false".red()
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    serde_json::to_string_pretty(&wrap_with_schema(value)).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

//! CLI commands.

mod check;
mod inspect;
mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ssn_personnummer::{CenturyWindow, Validator};
use tracing::debug;

use crate::config::Config;
use crate::output::OutputFormat;

/// SSN Check - validate Swedish personal identity numbers.
#[derive(Debug, Parser)]
#[command(name = "ssn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Last year a two-digit year may resolve to (default 2029).
    ///
    /// Overrides SSN_TWO_DIGIT_YEAR_MAX.
    #[arg(long, global = true)]
    two_digit_year_max: Option<i32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check one or more identity numbers.
    Check(check::CheckCommand),

    /// Show the details encoded in an identity number.
    Inspect(inspect::InspectCommand),

    /// Start the interactive menu (the default).
    Menu,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let window = self
            .two_digit_year_max
            .map(CenturyWindow::new)
            .unwrap_or_else(|| config.century_window());
        debug!(
            two_digit_year_max = window.two_digit_year_max(),
            "Configuration loaded"
        );

        let ctx = CommandContext {
            validator: Validator::new(window),
            format: self.format,
        };

        match self.command {
            Some(Commands::Check(cmd)) => cmd.run(ctx),
            Some(Commands::Inspect(cmd)) => cmd.run(ctx),
            Some(Commands::Menu) | None => menu::run_stdio(ctx),
        }
    }
}

/// Shared command context.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub validator: Validator,
    pub format: OutputFormat,
}

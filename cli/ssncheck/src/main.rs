//! ssncheck (ssn) - CLI for Swedish personal identity numbers
//!
//! Checks and inspects personnummer and samordningsnummer, either from
//! arguments or through an interactive menu.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    // Prefer RUST_LOG, fall back to SSN_LOG_LEVEL. Logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli.run(config)
}

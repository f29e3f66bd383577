//! Configuration for the CLI.
//!
//! Read from the environment; command-line flags take precedence.

use anyhow::{Context, Result};
use ssn_personnummer::CenturyWindow;

/// Default log level when neither `RUST_LOG` nor `SSN_LOG_LEVEL` is set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// CLI configuration (env-driven).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Last year a two-digit year can resolve to.
    pub two_digit_year_max: i32,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            two_digit_year_max: CenturyWindow::DEFAULT.two_digit_year_max(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let two_digit_year_max = lookup("SSN_TWO_DIGIT_YEAR_MAX")
            .map(|v| v.trim().parse())
            .transpose()
            .context("SSN_TWO_DIGIT_YEAR_MAX must be an integer year.")?
            .unwrap_or(defaults.two_digit_year_max);

        let log_level = lookup("SSN_LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            two_digit_year_max,
            log_level,
        })
    }

    /// Returns the century window for two-digit years.
    pub fn century_window(&self) -> CenturyWindow {
        CenturyWindow::new(self.two_digit_year_max)
    }
}

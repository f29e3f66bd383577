//! Interactive menu.
//!
//! Reads one command per line. Commands are case-insensitive:
//! `C` checks a number, `I` inspects one, `Q` quits. End of input quits too.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use ssn_personnummer::Validator;
use tracing::{debug, info};

use super::inspect::InspectView;
use super::CommandContext;
use crate::output::verdict;

const BANNER: &str = "\
Welcome to SSN Check
Checks whether a Swedish personal identity number is correct.

Type a command and press enter, then type the number when asked.
Example: 'C', then '19801224-1234'";

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    Check,
    Inspect,
    Quit,
}

impl MenuCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_uppercase().as_str() {
            "C" => Some(Self::Check),
            "I" => Some(Self::Inspect),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs the menu on stdin/stdout.
pub fn run_stdio(ctx: CommandContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(ctx.validator, stdin.lock(), stdout.lock()).run()
}

/// Prompt loop over any line-oriented input and output.
pub struct Menu<R, W> {
    validator: Validator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(validator: Validator, input: R, output: W) -> Self {
        Self {
            validator,
            input,
            output,
        }
    }

    /// Runs until `Q` or end of input.
    pub fn run(mut self) -> Result<()> {
        info!("Menu started");
        writeln!(self.output, "{}", "SSN Check".bold())?;
        writeln!(self.output, "{BANNER}\n")?;
        writeln!(self.output, "{}", "Choose 'C' to check a number".yellow())?;
        writeln!(self.output, "{}", "Choose 'I' to inspect a number".yellow())?;
        writeln!(self.output, "Choose 'Q' to exit")?;

        loop {
            let Some(line) = self.prompt("\nPerform your choice: ")? else {
                break;
            };

            match MenuCommand::parse(&line) {
                Some(MenuCommand::Check) => self.check()?,
                Some(MenuCommand::Inspect) => self.inspect()?,
                Some(MenuCommand::Quit) => break,
                None => writeln!(self.output, "{}", "Unknown command!".red())?,
            }
        }

        info!("Menu closed");
        Ok(())
    }

    fn check(&mut self) -> Result<()> {
        let Some(number) = self.prompt("Enter SSN: ")? else {
            return Ok(());
        };
        let number = number.trim();

        match self.validator.validate(number) {
            Ok(valid) => {
                debug!(input = %number, valid, "Checked identity number");
                writeln!(self.output, "{}", verdict(valid))?;
            }
            Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
        }
        Ok(())
    }

    fn inspect(&mut self) -> Result<()> {
        let Some(number) = self.prompt("Enter SSN: ")? else {
            return Ok(());
        };

        match self.validator.parse(number.trim()) {
            Ok(pnr) => {
                for row in InspectView::from(pnr).rows() {
                    writeln!(self.output, "{}: {}", row.field, row.value.green())?;
                }
            }
            Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
        }
        Ok(())
    }

    /// Writes `prompt` and reads one line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_menu(script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Menu::new(Validator::default(), script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_command_parse() {
        assert_eq!(MenuCommand::parse("c\n"), Some(MenuCommand::Check));
        assert_eq!(MenuCommand::parse(" I "), Some(MenuCommand::Inspect));
        assert_eq!(MenuCommand::parse("Q"), Some(MenuCommand::Quit));
        assert_eq!(MenuCommand::parse("check"), None);
    }

    #[test]
    fn test_menu_check_and_quit() {
        let out = run_menu("C\n510818-9167\nc\n900161-0017\nQ\n");
        assert!(out.starts_with("SSN Check"));
        assert!(out.contains("Enter SSN: true\n"));
        assert!(out.contains("Enter SSN: false\n"));
    }

    #[test]
    fn test_menu_reports_errors_and_continues() {
        let out = run_menu("C\n640327-381\nx\nC\n\nq\n");
        assert!(out.contains("failed to parse personal identity number"));
        assert!(out.contains("Unknown command!"));
        assert!(out.contains("identity number cannot be empty"));
    }

    #[test]
    fn test_menu_inspect() {
        let out = run_menu("I\n701063-2391\nQ\n");
        assert!(out.contains("Kind: samordningsnummer"));
        assert!(out.contains("Birth date: 1970-10-03"));
    }

    #[test]
    fn test_menu_ends_at_eof() {
        let out = run_menu("C\n");
        assert!(out.contains("Enter SSN: "));
        assert!(out.ends_with("Perform your choice: "));
    }
}

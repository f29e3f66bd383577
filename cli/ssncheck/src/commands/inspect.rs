//! `ssn inspect`: show what an identity number encodes.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use ssn_personnummer::{NumberKind, Personnummer, Sex};
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_single, print_table, OutputFormat};

use super::CommandContext;

/// Show the details encoded in an identity number.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Identity number, e.g. 701063-2391.
    number: String,
}

/// Details of a validated number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct InspectView {
    pub number: Personnummer,
    pub short: String,
    pub kind: NumberKind,
    pub birth_date: NaiveDate,
    pub sex: Sex,
}

impl From<Personnummer> for InspectView {
    fn from(pnr: Personnummer) -> Self {
        Self {
            number: pnr,
            short: pnr.format_short(),
            kind: pnr.kind(),
            birth_date: pnr.birth_date(),
            sex: pnr.sex(),
        }
    }
}

impl InspectView {
    pub(super) fn rows(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::new("Number", self.number.format_long()),
            FieldRow::new("Short form", self.short.clone()),
            FieldRow::new("Kind", self.kind.to_string()),
            FieldRow::new("Birth date", self.birth_date.to_string()),
            FieldRow::new("Sex", self.sex.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Tabled)]
pub(super) struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,

    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    fn new(field: &'static str, value: String) -> Self {
        Self { field, value }
    }
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let pnr = ctx
            .validator
            .parse(&self.number)
            .map_err(CliError::from)?;
        let view = InspectView::from(pnr);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => print_table(&view.rows()),
        }

        Ok(())
    }
}

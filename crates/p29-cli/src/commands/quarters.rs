//! Quarters command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use p29_core::fiscal::{fiscal_quarters, FiscalQuarter};

use crate::cli::OutputFormat;
use crate::commands::CommandContext;
use crate::output::print_output;

/// Arguments for the quarters command.
#[derive(Args, Debug)]
pub struct QuartersArgs {
    /// Fiscal year-end (march, june, september, december). Defaults to the saved selection.
    #[arg(short, long)]
    pub year_end: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct QuarterRow {
    #[tabled(rename = "Quarter")]
    quarter: String,
    #[tabled(rename = "Starts")]
    start: String,
    #[tabled(rename = "Ends")]
    end: String,
    #[tabled(rename = "Label")]
    label: String,
}

impl From<&FiscalQuarter> for QuarterRow {
    fn from(q: &FiscalQuarter) -> Self {
        Self {
            quarter: format!("Q{}", q.number()),
            start: q.start().to_string(),
            end: q.end().to_string(),
            label: q.label(),
        }
    }
}

/// Execute the quarters command.
pub fn execute(args: QuartersArgs, ctx: &CommandContext) -> Result<()> {
    let year_end = ctx.resolve_year_end(args.year_end.as_deref())?;
    let rows: Vec<QuarterRow> = fiscal_quarters(year_end)?
        .iter()
        .map(QuarterRow::from)
        .collect();

    if ctx.format == OutputFormat::Minimal {
        for row in &rows {
            println!("{}", row.label);
        }
        return Ok(());
    }

    ctx.header(&format!("Fiscal Quarters ({})", year_end.label()));
    print_output(&rows, ctx.format)
}

//! Select command implementation.
//!
//! Shows, saves or clears the remembered fiscal year-end.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use p29_core::FiscalYearEnd;
use p29_storage::FiscalYearSelection;

use crate::cli::OutputFormat;
use crate::commands::CommandContext;
use crate::output::{print_info, print_json_value, print_output, print_success, KeyValue};

/// Arguments for the select command.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Fiscal year-end to save (march, june, september, december)
    #[arg(conflicts_with = "reset")]
    pub year_end: Option<String>,

    /// Forget the saved year-end
    #[arg(long)]
    pub reset: bool,
}

#[derive(Debug, Serialize)]
struct SelectionView {
    year_end: FiscalYearEnd,
    label: &'static str,
    stored: bool,
}

/// Execute the select command.
pub fn execute(args: SelectArgs, ctx: &CommandContext) -> Result<()> {
    let store = ctx.open_store()?;

    if args.reset {
        let removed = FiscalYearSelection::clear(&store)?;
        if !ctx.quiet {
            if removed {
                print_success("Saved fiscal year-end cleared; using December");
            } else {
                print_info("No fiscal year-end was saved");
            }
        }
        return Ok(());
    }

    if let Some(raw) = args.year_end.as_deref() {
        let year_end: FiscalYearEnd = raw.parse()?;
        FiscalYearSelection::save(&store, year_end)?;
        if !ctx.quiet {
            print_success(&format!("Fiscal year-end set to {}", year_end.label()));
        }
        return Ok(());
    }

    let stored = FiscalYearSelection::stored(&store)?;
    let year_end = stored.unwrap_or_default();
    let view = SelectionView {
        year_end,
        label: year_end.label(),
        stored: stored.is_some(),
    };

    match ctx.format {
        OutputFormat::Json => print_json_value(&view)?,
        OutputFormat::Minimal => println!("{}", view.year_end),
        OutputFormat::Table | OutputFormat::Csv => {
            ctx.header("Fiscal Year-End");
            let source = if view.stored { "saved" } else { "default" };
            print_output(
                &[
                    KeyValue::new("Year-End", view.label),
                    KeyValue::new("Source", source),
                    KeyValue::new("Store", ctx.store_path().display().to_string()),
                ],
                ctx.format,
            )?;
        }
    }

    Ok(())
}

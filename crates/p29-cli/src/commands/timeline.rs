//! Timeline command implementation.
//!
//! Shows the first compliance period for a fiscal year-end.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use p29_core::fiscal::REPORT_DUE_MONTHS;
use p29_core::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::CommandContext;
use crate::output::{print_json_value, print_output, KeyValue};

/// Arguments for the timeline command.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Fiscal year-end (march, june, september, december). Defaults to the saved selection.
    #[arg(short, long)]
    pub year_end: Option<String>,
}

/// Everything the calculator derives for one year-end.
#[derive(Debug, Serialize)]
struct TimelineReport {
    year_end: FiscalYearEnd,
    compliance_fy_start: Date,
    compliance_fy_end: Date,
    annual_report_due: Date,
    preparation_year_label: String,
    compliance_year_label: String,
}

impl TimelineReport {
    fn for_year_end(year_end: FiscalYearEnd) -> Self {
        Self {
            year_end,
            compliance_fy_start: compliance_fy_start(year_end),
            compliance_fy_end: compliance_fy_end(year_end),
            annual_report_due: annual_report_due_date(year_end),
            preparation_year_label: preparation_year_label(),
            compliance_year_label: compliance_year_label(year_end),
        }
    }

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("Fiscal Year-End", self.year_end.label()),
            KeyValue::new("Compliance FY Starts", self.compliance_fy_start.long_form()),
            KeyValue::new("Compliance FY Ends", self.compliance_fy_end.long_form()),
            KeyValue::new(
                "Annual Report Due",
                format!(
                    "~{} ({} months after FY-end)",
                    self.annual_report_due.long_form(),
                    REPORT_DUE_MONTHS
                ),
            ),
            KeyValue::new("Preparation", self.preparation_year_label.clone()),
            KeyValue::new("Compliance Year", self.compliance_year_label.clone()),
        ]
    }
}

/// Execute the timeline command.
pub fn execute(args: TimelineArgs, ctx: &CommandContext) -> Result<()> {
    let year_end = ctx.resolve_year_end(args.year_end.as_deref())?;
    let report = TimelineReport::for_year_end(year_end);

    match ctx.format {
        OutputFormat::Table => {
            ctx.header("Your Compliance Timeline");
            print_output(&report.rows(), ctx.format)?;
        }
        OutputFormat::Json => print_json_value(&report)?,
        OutputFormat::Csv => print_output(&report.rows(), ctx.format)?,
        OutputFormat::Minimal => {
            println!(
                "{} {} {}",
                report.compliance_fy_start, report.compliance_fy_end, report.annual_report_due
            );
        }
    }

    Ok(())
}

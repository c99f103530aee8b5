//! Scenarios command implementation.
//!
//! Prints the fiscal year-end timeline table.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use p29_core::fiscal::{compliance_scenarios, ComplianceScenario};

use crate::commands::CommandContext;
use crate::output::{print_info, print_output};

#[derive(Debug, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Fiscal Year-End")]
    year_end: String,
    #[tabled(rename = "Compliance FY Starts")]
    compliance_fy_starts: String,
    #[tabled(rename = "Evidence Collection Period")]
    evidence_period: String,
    #[tabled(rename = "Annual Report Due")]
    annual_report_due: String,
    #[tabled(rename = "Preparation Activities")]
    preparation_window: String,
}

impl From<ComplianceScenario> for ScenarioRow {
    fn from(s: ComplianceScenario) -> Self {
        Self {
            year_end: s.year_end_label,
            compliance_fy_starts: s.compliance_fy_starts,
            evidence_period: s.evidence_period,
            annual_report_due: s.annual_report_due,
            preparation_window: s.preparation_window,
        }
    }
}

/// Execute the scenarios command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<ScenarioRow> = compliance_scenarios()
        .into_iter()
        .map(ScenarioRow::from)
        .collect();

    ctx.header("Fiscal Year-End Timeline Calculator");
    print_output(&rows, ctx.format)?;

    if ctx.header_enabled() {
        print_info("Annual reports are typically due 4 months after fiscal year-end.");
    }
    Ok(())
}

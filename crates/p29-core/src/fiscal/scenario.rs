//! Side-by-side timeline for every fiscal year-end.

use serde::{Deserialize, Serialize};

use crate::fiscal::calculator::{annual_report_due_date, compliance_period, PREPARATION_YEAR};
use crate::types::FiscalYearEnd;

/// One row of the fiscal year-end timeline table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceScenario {
    /// The year-end this row describes.
    pub year_end: FiscalYearEnd,
    /// Selector label, e.g. `March (31 Mar)`.
    pub year_end_label: String,
    /// Month the compliance year starts, e.g. `Apr 2026`.
    pub compliance_fy_starts: String,
    /// Evidence collection window, e.g. `Apr 2026 - Mar 2027`.
    pub evidence_period: String,
    /// Month the annual report is due, e.g. `Jul 2027`.
    pub annual_report_due: String,
    /// Window available for preparation activities.
    pub preparation_window: String,
}

/// Builds the scenario row for `year_end`.
pub fn compliance_scenario(year_end: FiscalYearEnd) -> ComplianceScenario {
    let period = compliance_period(year_end);
    let start = period.start();

    // Whole calendar quarters between the effective year opening and the period start
    let lead_quarters = (start.month() - 1) / 3;
    let preparation_window = if lead_quarters == 0 {
        PREPARATION_YEAR.to_string()
    } else {
        format!("{PREPARATION_YEAR} - Q{lead_quarters} {}", start.year())
    };

    ComplianceScenario {
        year_end,
        year_end_label: year_end.label().to_string(),
        compliance_fy_starts: start.month_year(),
        evidence_period: period.month_range(),
        annual_report_due: annual_report_due_date(year_end).month_year(),
        preparation_window,
    }
}

/// Builds the scenario table for all four year-ends.
pub fn compliance_scenarios() -> Vec<ComplianceScenario> {
    FiscalYearEnd::ALL
        .iter()
        .map(|&year_end| compliance_scenario(year_end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_december_scenario() {
        let row = compliance_scenario(FiscalYearEnd::December);
        assert_eq!(row.year_end_label, "December (31 Dec)");
        assert_eq!(row.compliance_fy_starts, "Jan 2026");
        assert_eq!(row.evidence_period, "Jan 2026 - Dec 2026");
        assert_eq!(row.annual_report_due, "Apr 2027");
        assert_eq!(row.preparation_window, "2025");
    }

    #[test]
    fn test_non_december_scenarios() {
        let rows = compliance_scenarios();
        assert_eq!(rows.len(), 4);

        let march = &rows[1];
        assert_eq!(march.evidence_period, "Apr 2026 - Mar 2027");
        assert_eq!(march.annual_report_due, "Jul 2027");
        assert_eq!(march.preparation_window, "2025 - Q1 2026");

        let june = &rows[2];
        assert_eq!(june.compliance_fy_starts, "Jul 2026");
        assert_eq!(june.annual_report_due, "Oct 2027");
        assert_eq!(june.preparation_window, "2025 - Q2 2026");

        let september = &rows[3];
        assert_eq!(september.evidence_period, "Oct 2026 - Sep 2027");
        assert_eq!(september.annual_report_due, "Jan 2028");
        assert_eq!(september.preparation_window, "2025 - Q3 2026");
    }
}

//! Fiscal-year compliance calculations.
//!
//! - [`calculator`]: compliance-period boundaries, report deadline and labels
//! - [`CompliancePeriod`] / [`FiscalQuarter`]: derived date ranges
//! - [`ComplianceScenario`]: the timeline table across all year-ends

pub mod calculator;
mod period;
mod scenario;

pub use calculator::{
    annual_report_due_date, compliance_fy_end, compliance_fy_start, compliance_period,
    compliance_year_label, effective_date, fiscal_quarter, fiscal_quarter_label, fiscal_quarters,
    preparation_year_label, PREPARATION_YEAR, REPORT_DUE_MONTHS,
};
pub use period::{CompliancePeriod, FiscalQuarter};
pub use scenario::{compliance_scenario, compliance_scenarios, ComplianceScenario};

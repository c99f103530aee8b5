//! Compliance-period calculator.
//!
//! Every function here is a pure function of the [`FiscalYearEnd`] it is
//! given. Period boundaries come from a fixed table anchored on the
//! Provision 29 effective date, not from month arithmetic.

use chrono::NaiveDate;

use crate::error::{PlaybookError, PlaybookResult};
use crate::fiscal::period::{CompliancePeriod, FiscalQuarter};
use crate::types::{Date, FiscalYearEnd};

/// Calendar year in which organisations prepare for the first compliance period.
pub const PREPARATION_YEAR: i32 = 2025;

/// Months between fiscal year-end and the annual report deadline.
pub const REPORT_DUE_MONTHS: i32 = 4;

/// First day on which Provision 29 applies.
pub fn effective_date() -> Date {
    fixed(2026, 1, 1)
}

fn fixed(year: i32, month: u32, day: u32) -> Date {
    Date::from(
        NaiveDate::from_ymd_opt(year, month, day).expect("compliance table dates are valid"),
    )
}

/// Returns the first day of the first fiscal year in which the declaration
/// is mandatory.
///
/// | year-end  | start      |
/// |-----------|------------|
/// | december  | 2026-01-01 |
/// | march     | 2026-04-01 |
/// | june      | 2026-07-01 |
/// | september | 2026-10-01 |
pub fn compliance_fy_start(year_end: FiscalYearEnd) -> Date {
    match year_end {
        FiscalYearEnd::December => fixed(2026, 1, 1),
        FiscalYearEnd::March => fixed(2026, 4, 1),
        FiscalYearEnd::June => fixed(2026, 7, 1),
        FiscalYearEnd::September => fixed(2026, 10, 1),
    }
}

/// Returns the last day of the first mandatory fiscal year.
///
/// | year-end  | end        |
/// |-----------|------------|
/// | december  | 2026-12-31 |
/// | march     | 2027-03-31 |
/// | june      | 2027-06-30 |
/// | september | 2027-09-30 |
pub fn compliance_fy_end(year_end: FiscalYearEnd) -> Date {
    match year_end {
        FiscalYearEnd::December => fixed(2026, 12, 31),
        FiscalYearEnd::March => fixed(2027, 3, 31),
        FiscalYearEnd::June => fixed(2027, 6, 30),
        FiscalYearEnd::September => fixed(2027, 9, 30),
    }
}

/// Returns the first compliance period as a `(start, end)` pair.
pub fn compliance_period(year_end: FiscalYearEnd) -> CompliancePeriod {
    CompliancePeriod::new(compliance_fy_start(year_end), compliance_fy_end(year_end))
}

/// Returns the date by which the annual report carrying the first
/// declaration is due: four calendar months after the fiscal year-end.
///
/// The day is clamped to the end of the target month, so a 31 December
/// year-end is due on 30 April.
pub fn annual_report_due_date(year_end: FiscalYearEnd) -> Date {
    compliance_fy_end(year_end)
        .add_months(REPORT_DUE_MONTHS)
        .expect("report due date is within the supported date range")
}

/// Returns the label for the preparation window.
pub fn preparation_year_label() -> String {
    format!("[Preparation Year - {PREPARATION_YEAR}]")
}

/// Returns the compliance year label, e.g. `[Compliance FY: 2026]` or
/// `[Compliance FY: 2026-2027]` when the period spans two calendar years.
pub fn compliance_year_label(year_end: FiscalYearEnd) -> String {
    let start = compliance_fy_start(year_end);
    let end = compliance_fy_end(year_end);

    if start.year() == end.year() {
        format!("[Compliance FY: {}]", start.year())
    } else {
        format!("[Compliance FY: {}-{}]", start.year(), end.year())
    }
}

/// Returns fiscal quarter `quarter` (1-4) of the first compliance period.
///
/// # Errors
///
/// Returns `PlaybookError::InvalidArgument` if `quarter` is not in `1..=4`.
pub fn fiscal_quarter(year_end: FiscalYearEnd, quarter: u32) -> PlaybookResult<FiscalQuarter> {
    if !(1..=4).contains(&quarter) {
        return Err(PlaybookError::invalid_argument(format!(
            "quarter must be between 1 and 4, got {quarter}"
        )));
    }

    let offset = (quarter as i32 - 1) * 3;
    let start = compliance_fy_start(year_end).add_months(offset)?;
    let end = start.add_months(2)?.end_of_month();

    Ok(FiscalQuarter::new(quarter, start, end))
}

/// Returns all four fiscal quarters of the first compliance period.
pub fn fiscal_quarters(year_end: FiscalYearEnd) -> PlaybookResult<[FiscalQuarter; 4]> {
    Ok([
        fiscal_quarter(year_end, 1)?,
        fiscal_quarter(year_end, 2)?,
        fiscal_quarter(year_end, 3)?,
        fiscal_quarter(year_end, 4)?,
    ])
}

/// Returns the label for a fiscal quarter, e.g.
/// `[Fiscal Q1: Apr 2026 - Jun 2026]`.
///
/// # Errors
///
/// Returns `PlaybookError::InvalidArgument` if `quarter` is not in `1..=4`.
pub fn fiscal_quarter_label(year_end: FiscalYearEnd, quarter: u32) -> PlaybookResult<String> {
    fiscal_quarter(year_end, quarter).map(|q| q.label())
}

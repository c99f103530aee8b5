//! Integration tests for the compliance calendar.
//!
//! Checks the calculator's invariants across every fiscal year-end and the
//! month arithmetic it depends on.

use p29_core::prelude::*;
use proptest::prelude::*;

fn year_end_strategy() -> impl Strategy<Value = FiscalYearEnd> {
    prop::sample::select(FiscalYearEnd::ALL.to_vec())
}

// ============================================================================
// Calculator invariants
// ============================================================================

#[test]
fn start_precedes_end_for_every_year_end() {
    for ye in FiscalYearEnd::ALL {
        assert!(compliance_fy_start(ye) < compliance_fy_end(ye), "{ye}");
    }
}

#[test]
fn period_is_one_year_less_a_day() {
    for ye in FiscalYearEnd::ALL {
        let start = compliance_fy_start(ye);
        let end = compliance_fy_end(ye);

        let length = end - start;
        assert!(length == 364 || length == 365, "{ye}: {length} days");
        assert_eq!(start.add_years(1).unwrap().add_days(-1), end, "{ye}");
    }
}

#[test]
fn report_due_after_year_end() {
    for ye in FiscalYearEnd::ALL {
        assert!(annual_report_due_date(ye) > compliance_fy_end(ye), "{ye}");
    }
}

#[test]
fn report_due_dates() {
    let expected = [
        (FiscalYearEnd::December, "2027-04-30"),
        (FiscalYearEnd::March, "2027-07-31"),
        (FiscalYearEnd::June, "2027-10-30"),
        (FiscalYearEnd::September, "2028-01-30"),
    ];
    for (ye, due) in expected {
        assert_eq!(annual_report_due_date(ye).to_string(), due, "{ye}");
    }
}

#[test]
fn first_quarter_starts_with_compliance_year() {
    for ye in FiscalYearEnd::ALL {
        let start = compliance_fy_start(ye);
        let label = fiscal_quarter_label(ye, 1).unwrap();
        let prefix = format!("[Fiscal Q1: {} - ", start.month_year());
        assert!(label.starts_with(&prefix), "{label}");
    }
}

#[test]
fn quarter_zero_and_five_rejected() {
    for ye in FiscalYearEnd::ALL {
        assert!(matches!(
            fiscal_quarter_label(ye, 0),
            Err(PlaybookError::InvalidArgument { .. })
        ));
        assert!(matches!(
            fiscal_quarter_label(ye, 5),
            Err(PlaybookError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn unknown_year_end_rejected() {
    let err = "august".parse::<FiscalYearEnd>().unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn compliance_labels() {
    assert_eq!(
        compliance_year_label(FiscalYearEnd::December),
        "[Compliance FY: 2026]"
    );
    for ye in [FiscalYearEnd::March, FiscalYearEnd::June, FiscalYearEnd::September] {
        assert_eq!(compliance_year_label(ye), "[Compliance FY: 2026-2027]");
    }
    assert_eq!(preparation_year_label(), "[Preparation Year - 2025]");
}

#[test]
fn scenarios_agree_with_calculator() {
    for row in compliance_scenarios() {
        let period = compliance_period(row.year_end);
        assert_eq!(row.compliance_fy_starts, period.start().month_year());
        assert_eq!(
            row.annual_report_due,
            annual_report_due_date(row.year_end).month_year()
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn quarters_stay_inside_period(ye in year_end_strategy(), quarter in 1u32..=4) {
        let q = fiscal_quarter(ye, quarter).unwrap();
        let period = compliance_period(ye);
        prop_assert!(period.contains(q.start()));
        prop_assert!(period.contains(q.end()));
        prop_assert_eq!(q.start().day(), 1);
        prop_assert!(q.end().days_between(&q.start().add_months(3).unwrap()) == 1);
    }

    #[test]
    fn out_of_range_quarters_rejected(ye in year_end_strategy(), quarter in 5u32..) {
        prop_assert!(fiscal_quarter(ye, quarter).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn add_months_clamps_day(
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=31,
        months in -48i32..48,
    ) {
        if let Ok(date) = Date::from_ymd(year, month, day) {
            let shifted = date.add_months(months).unwrap();
            let expected_index = year * 12 + month as i32 - 1 + months;
            prop_assert_eq!(shifted.year() * 12 + shifted.month() as i32 - 1, expected_index);
            prop_assert!(shifted.day() <= day);
            prop_assert!(shifted.day() == day || shifted.day() == shifted.days_in_month());
        }
    }
}

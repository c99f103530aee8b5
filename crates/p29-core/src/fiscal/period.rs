//! Derived compliance periods and fiscal quarters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// The first mandatory fiscal year, as an inclusive `(start, end)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompliancePeriod {
    start: Date,
    end: Date,
}

impl CompliancePeriod {
    pub(crate) fn new(start: Date, end: Date) -> Self {
        debug_assert!(start <= end, "compliance period must not be inverted");
        Self { start, end }
    }

    /// First day of the period.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the period.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Days from start to end (364 or 365 for a twelve-month period).
    #[must_use]
    pub fn length_days(&self) -> i64 {
        self.end - self.start
    }

    /// Returns true if `date` falls inside the period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Evidence-collection window as month/year text, e.g. `Apr 2026 - Mar 2027`.
    #[must_use]
    pub fn month_range(&self) -> String {
        format!("{} - {}", self.start.month_year(), self.end.month_year())
    }
}

impl fmt::Display for CompliancePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A three-month quarter of the first compliance period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalQuarter {
    number: u32,
    start: Date,
    end: Date,
}

impl FiscalQuarter {
    pub(crate) fn new(number: u32, start: Date, end: Date) -> Self {
        Self { number, start, end }
    }

    /// Quarter number (1-4).
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// First day of the quarter.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the quarter.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Display label, e.g. `[Fiscal Q2: Jul 2026 - Sep 2026]`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "[Fiscal Q{}: {} - {}]",
            self.number,
            self.start.month_year(),
            self.end.month_year()
        )
    }
}

//! Date type for compliance calendar calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{PlaybookError, PlaybookResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// calendar-month arithmetic the compliance calculator relies on.
///
/// # Example
///
/// ```rust
/// use p29_core::types::Date;
///
/// let date = Date::from_ymd(2026, 12, 31).unwrap();
/// let due = date.add_months(4).unwrap();
/// assert_eq!(due.to_string(), "2027-04-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> PlaybookResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| PlaybookError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> PlaybookResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| PlaybookError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of calendar months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Dec 31 + 4 months),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> PlaybookResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// 29 February rolls back to 28 February in non-leap years.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> PlaybookResult<Self> {
        self.add_months(years * 12)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        self.add_days(1 - i64::from(self.day()))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.add_days(i64::from(self.days_in_month() - self.day()))
    }

    /// Formats as abbreviated month and year, e.g. `Jan 2026`.
    #[must_use]
    pub fn month_year(&self) -> String {
        self.0.format("%b %Y").to_string()
    }

    /// Formats as day, abbreviated month and year, e.g. `1 Jan 2026`.
    #[must_use]
    pub fn long_form(&self) -> String {
        self.0.format("%-d %b %Y").to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("month is always in 1..=12"),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2026, 4, 1).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 4);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2026, 2, 29).is_err());
        assert!(Date::from_ymd(2026, 13, 1).is_err());
        assert!(Date::from_ymd(2028, 2, 29).is_ok());
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let date = Date::from_ymd(2026, 12, 31).unwrap();
        assert_eq!(date.add_months(4).unwrap(), Date::from_ymd(2027, 4, 30).unwrap());

        let date = Date::from_ymd(2027, 10, 31).unwrap();
        assert_eq!(date.add_months(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_add_months_year_rollover() {
        let date = Date::from_ymd(2027, 9, 30).unwrap();
        assert_eq!(date.add_months(4).unwrap(), Date::from_ymd(2028, 1, 30).unwrap());
    }

    #[test]
    fn test_add_negative_months() {
        let date = Date::from_ymd(2026, 1, 15).unwrap();
        assert_eq!(date.add_months(-1).unwrap(), Date::from_ymd(2025, 12, 15).unwrap());
        assert_eq!(date.add_months(-13).unwrap(), Date::from_ymd(2024, 12, 15).unwrap());
    }

    #[test]
    fn test_add_years_leap_day() {
        let date = Date::from_ymd(2028, 2, 29).unwrap();
        assert_eq!(date.add_years(1).unwrap(), Date::from_ymd(2029, 2, 28).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2026, 1, 1).unwrap();
        let d2 = Date::from_ymd(2026, 12, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 364);
        assert_eq!(d2 - d1, 364);
        assert_eq!(d2.days_between(&d1), -364);
    }

    #[test]
    fn test_start_end_of_month() {
        let date = Date::from_ymd(2028, 2, 10).unwrap();
        assert_eq!(date.start_of_month(), Date::from_ymd(2028, 2, 1).unwrap());
        assert_eq!(date.end_of_month(), Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2026-07-01").unwrap();
        assert_eq!(date, Date::from_ymd(2026, 7, 1).unwrap());
        assert!(Date::parse("01/07/2026").is_err());
    }

    #[test]
    fn test_formatting() {
        let date = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(format!("{}", date), "2026-01-01");
        assert_eq!(date.month_year(), "Jan 2026");
        assert_eq!(date.long_form(), "1 Jan 2026");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2027, 3, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2027-03-31\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}

//! Fiscal year-end selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlaybookError;

/// The month in which an organisation's fiscal year closes.
///
/// UK listed companies overwhelmingly close their books at the end of one of
/// these four quarter months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FiscalYearEnd {
    /// Year ends 31 March.
    March,
    /// Year ends 30 June.
    June,
    /// Year ends 30 September.
    September,
    /// Year ends 31 December (calendar year).
    #[default]
    December,
}

impl FiscalYearEnd {
    /// All year-ends in display order (calendar year first).
    pub const ALL: [FiscalYearEnd; 4] = [
        FiscalYearEnd::December,
        FiscalYearEnd::March,
        FiscalYearEnd::June,
        FiscalYearEnd::September,
    ];

    /// Returns the closing month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        match self {
            FiscalYearEnd::March => 3,
            FiscalYearEnd::June => 6,
            FiscalYearEnd::September => 9,
            FiscalYearEnd::December => 12,
        }
    }

    /// Returns the lowercase identifier used for persistence.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FiscalYearEnd::March => "march",
            FiscalYearEnd::June => "june",
            FiscalYearEnd::September => "september",
            FiscalYearEnd::December => "december",
        }
    }

    /// Returns the selector label, e.g. `March (31 Mar)`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FiscalYearEnd::March => "March (31 Mar)",
            FiscalYearEnd::June => "June (30 Jun)",
            FiscalYearEnd::September => "September (30 Sep)",
            FiscalYearEnd::December => "December (31 Dec)",
        }
    }
}

impl fmt::Display for FiscalYearEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FiscalYearEnd {
    type Err = PlaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "march" => Ok(FiscalYearEnd::March),
            "june" => Ok(FiscalYearEnd::June),
            "september" => Ok(FiscalYearEnd::September),
            "december" => Ok(FiscalYearEnd::December),
            _ => Err(PlaybookError::invalid_argument(format!(
                "unknown fiscal year-end '{s}', expected march, june, september or december"
            ))),
        }
    }
}

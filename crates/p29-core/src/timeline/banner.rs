//! Timeline context banner.

use serde::{Deserialize, Serialize};

use crate::fiscal::effective_date;
use crate::types::Date;

/// Date from which the countdown banner is shown.
fn countdown_opens() -> Date {
    effective_date()
        .add_months(-3)
        .expect("countdown opening is within the supported date range")
}

/// End of the first calendar compliance year.
fn evidence_year_closes() -> Date {
    effective_date()
        .add_years(1)
        .expect("evidence year close is within the supported date range")
}

/// Banner describing where the calendar currently sits relative to FY2026.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineBanner {
    /// Final quarter of 2025: weeks left until FY2026 begins.
    Countdown {
        /// Whole weeks remaining, rounded up.
        weeks_remaining: i64,
    },
    /// Calendar 2026: the first evidence-collection year.
    EvidenceCollection,
}

impl TimelineBanner {
    /// Selects the banner for `today`.
    ///
    /// Returns `None` before 1 October 2025 and from 1 January 2027.
    pub fn for_date(today: Date) -> Option<Self> {
        let effective = effective_date();

        if today < countdown_opens() {
            None
        } else if today < effective {
            let days = today.days_between(&effective).max(0);
            Some(Self::Countdown {
                weeks_remaining: (days + 6) / 7,
            })
        } else if today < evidence_year_closes() {
            Some(Self::EvidenceCollection)
        } else {
            None
        }
    }

    /// Short heading.
    pub fn headline(&self) -> String {
        match self {
            Self::Countdown { weeks_remaining } => {
                format!("{weeks_remaining} weeks until FY2026 begins")
            }
            Self::EvidenceCollection => "FY2026 Evidence Collection Period".to_string(),
        }
    }

    /// Guidance paragraph.
    pub fn body(&self) -> &'static str {
        match self {
            Self::Countdown { .. } => {
                "Organisations not yet in Phase 3 (Assurance Preparation) face compressed \
                 timelines. The four-phase framework remains valid: focus on establishing \
                 defensible foundations and demonstrating good faith progress."
            }
            Self::EvidenceCollection => {
                "FY2026 is the evidence collection year. Boards must declare effectiveness in \
                 their 2027 Annual Reports. Focus on control execution, evidence gathering, \
                 and issue remediation."
            }
        }
    }

    /// Whether the banner points readers at the accelerated track.
    pub fn links_accelerated_guidance(&self) -> bool {
        matches!(self, Self::Countdown { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_hidden_before_october_2025() {
        assert_eq!(TimelineBanner::for_date(date(2025, 9, 30)), None);
    }

    #[test]
    fn test_countdown_window() {
        assert_eq!(
            TimelineBanner::for_date(date(2025, 10, 1)),
            Some(TimelineBanner::Countdown { weeks_remaining: 14 })
        );
        assert_eq!(
            TimelineBanner::for_date(date(2025, 12, 31)),
            Some(TimelineBanner::Countdown { weeks_remaining: 1 })
        );
        assert_eq!(
            TimelineBanner::for_date(date(2025, 12, 25)),
            Some(TimelineBanner::Countdown { weeks_remaining: 1 })
        );
        assert_eq!(
            TimelineBanner::for_date(date(2025, 12, 24)),
            Some(TimelineBanner::Countdown { weeks_remaining: 2 })
        );
    }

    #[test]
    fn test_evidence_collection_year() {
        for today in [date(2026, 1, 1), date(2026, 10, 16), date(2026, 12, 31)] {
            assert_eq!(
                TimelineBanner::for_date(today),
                Some(TimelineBanner::EvidenceCollection)
            );
        }
    }

    #[test]
    fn test_hidden_after_2026() {
        assert_eq!(TimelineBanner::for_date(date(2027, 1, 1)), None);
    }

    #[test]
    fn test_text() {
        let banner = TimelineBanner::Countdown { weeks_remaining: 5 };
        assert_eq!(banner.headline(), "5 weeks until FY2026 begins");
        assert!(banner.links_accelerated_guidance());
        assert!(!TimelineBanner::EvidenceCollection.links_accelerated_guidance());
        assert!(TimelineBanner::EvidenceCollection.body().contains("2027 Annual Reports"));
    }
}

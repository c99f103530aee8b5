//! Emergency implementation track.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::types::Date;

/// Urgency of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must start immediately.
    Critical,
    /// Compressed but not immediate.
    High,
    /// Regulatory deadline.
    Deadline,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Deadline => "deadline",
        };
        write!(f, "{name}")
    }
}

/// A dated step on the emergency track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Week the milestone starts.
    pub week_of: Date,
    /// Short title.
    pub title: &'static str,
    /// What has to happen that week.
    pub description: &'static str,
    /// Status badge text.
    pub status: &'static str,
    /// Urgency.
    pub priority: Priority,
}

impl Milestone {
    /// Days from `today` until this milestone, floored at zero.
    pub fn days_from(&self, today: Date) -> i64 {
        days_until(today, self.week_of)
    }
}

/// Whole days from `today` to `target`, or zero once `target` has passed.
pub fn days_until(today: Date, target: Date) -> i64 {
    today.days_between(&target).max(0)
}

fn week_of(year: i32, month: u32, day: u32) -> Date {
    Date::from(NaiveDate::from_ymd_opt(year, month, day).expect("milestone dates are valid"))
}

/// The compressed track for organisations starting in December 2025.
pub fn emergency_milestones() -> Vec<Milestone> {
    vec![
        Milestone {
            week_of: week_of(2025, 12, 2),
            title: "Emergency Framework Scoping",
            description: "Rapidly define material controls framework with external support. \
                          Compress 8-week Phase 1 into 2 weeks using pre-configured templates.",
            status: "CRITICAL - IMMEDIATE START",
            priority: Priority::Critical,
        },
        Milestone {
            week_of: week_of(2025, 12, 9),
            title: "Accelerated GRC Platform Selection",
            description: "Select and contract GRC platform within 1 week (vs. normal 12 weeks). \
                          Consider pre-configured packages and emergency deployment.",
            status: "CRITICAL - 1 WEEK",
            priority: Priority::Critical,
        },
        Milestone {
            week_of: week_of(2025, 12, 16),
            title: "Rapid Platform Configuration & Control Setup",
            description: "Compress 16-week implementation to 3 weeks. Use vendor accelerators, \
                          accept out-of-box configurations, minimize customization.",
            status: "HIGH PRIORITY",
            priority: Priority::High,
        },
        Milestone {
            week_of: week_of(2025, 12, 23),
            title: "Emergency Testing & Evidence Collection",
            description: "Begin initial control testing during holiday period. Limited test \
                          coverage acceptable for year 1 with documented plan for expansion.",
            status: "HIGH PRIORITY",
            priority: Priority::High,
        },
        Milestone {
            week_of: week_of(2026, 1, 1),
            title: "Provision 29 Effective Date",
            description: "Framework operational for FY2026. Board must declare effectiveness by \
                          FY2026 annual report. Emergency implementations may qualify declaration \
                          with 'developing' status.",
            status: "EFFECTIVE DATE",
            priority: Priority::Deadline,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiscal::effective_date;

    #[test]
    fn test_milestones_are_ordered() {
        let milestones = emergency_milestones();
        assert_eq!(milestones.len(), 5);
        for pair in milestones.windows(2) {
            assert!(pair[0].week_of < pair[1].week_of);
        }
    }

    #[test]
    fn test_track_ends_on_effective_date() {
        let last = emergency_milestones().pop().unwrap();
        assert_eq!(last.week_of, effective_date());
        assert_eq!(last.priority, Priority::Deadline);
    }

    #[test]
    fn test_days_from() {
        let first = &emergency_milestones()[0];
        let today = Date::from_ymd(2025, 11, 25).unwrap();
        assert_eq!(first.days_from(today), 7);
        assert_eq!(first.days_from(Date::from_ymd(2026, 1, 5).unwrap()), 0);
    }

    #[test]
    fn test_days_until_same_day() {
        let d = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(days_until(d, d), 0);
    }
}

//! Performance budget check.

use serde::Serialize;

use crate::metric::MetricName;
use crate::summary::VitalsSummary;

/// Metrics with a budget, in reporting order. The target is the metric's
/// "good" threshold.
const BUDGETED: [MetricName; 5] = [
    MetricName::Lcp,
    MetricName::Fid,
    MetricName::Cls,
    MetricName::Fcp,
    MetricName::Ttfb,
];

/// Outcome of a budget check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    /// True when no metric exceeds its target.
    pub passed: bool,
    /// One line per metric over target.
    pub violations: Vec<String>,
}

impl BudgetReport {
    /// Checks the latest value of each budgeted metric. Metrics with no
    /// measurements pass.
    pub fn check(summary: &VitalsSummary) -> Self {
        let violations: Vec<String> = BUDGETED
            .iter()
            .filter_map(|&name| {
                let stats = summary.get(name)?;
                let target = name.threshold().good;
                (stats.latest > target).then(|| {
                    format!(
                        "{}: {} (target: <{}{})",
                        name,
                        name.format_value(stats.latest),
                        target,
                        name.unit()
                    )
                })
            })
            .collect();

        Self {
            passed: violations.is_empty(),
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MetricRecord;
    use crate::metric::WebVitalsMetric;
    use crate::summary::summarize;
    use chrono::Utc;

    fn summary_of(values: &[(MetricName, f64)]) -> VitalsSummary {
        summarize(
            values
                .iter()
                .map(|&(name, value)| MetricRecord {
                    metric: WebVitalsMetric::new(name, value),
                    timestamp: Utc::now(),
                    url: "/".to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_passes() {
        let report = BudgetReport::check(&VitalsSummary::default());
        assert!(report.passed);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_at_target_passes() {
        let report = BudgetReport::check(&summary_of(&[
            (MetricName::Lcp, 2500.0),
            (MetricName::Cls, 0.1),
            (MetricName::Ttfb, 800.0),
        ]));
        assert!(report.passed);
    }

    #[test]
    fn test_violations_in_order() {
        let report = BudgetReport::check(&summary_of(&[
            (MetricName::Ttfb, 950.0),
            (MetricName::Cls, 0.3),
            (MetricName::Lcp, 3100.0),
            (MetricName::Fid, 40.0),
        ]));
        assert!(!report.passed);
        assert_eq!(
            report.violations,
            vec![
                "LCP: 3100ms (target: <2500ms)".to_string(),
                "CLS: 0.300 (target: <0.1)".to_string(),
                "TTFB: 950ms (target: <800ms)".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_latest_counts() {
        let report = BudgetReport::check(&summary_of(&[
            (MetricName::Fcp, 5000.0),
            (MetricName::Fcp, 1000.0),
        ]));
        assert!(report.passed);
    }

    #[test]
    fn test_inp_has_no_budget() {
        let report = BudgetReport::check(&summary_of(&[(MetricName::Inp, 900.0)]));
        assert!(report.passed);
    }
}

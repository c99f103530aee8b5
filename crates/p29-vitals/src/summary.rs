//! Per-metric statistics over retained measurements.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::log::MetricRecord;
use crate::metric::{rate, MetricName, Rating};

/// Metrics included in summaries.
pub const SUMMARY_METRICS: [MetricName; 5] = [
    MetricName::Cls,
    MetricName::Fid,
    MetricName::Fcp,
    MetricName::Lcp,
    MetricName::Ttfb,
];

/// Statistics for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Number of measurements.
    pub samples: usize,
    /// Mean value.
    pub avg: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Most recent value.
    pub latest: f64,
    /// Rating of the most recent value.
    pub rating: Rating,
}

/// Statistics for every summarised metric with at least one measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VitalsSummary {
    /// Total measurements considered, including unsummarised metrics.
    pub total_records: usize,
    /// Per-metric statistics.
    pub metrics: BTreeMap<MetricName, MetricSummary>,
}

impl VitalsSummary {
    /// Statistics for `name`, if any were recorded.
    pub fn get(&self, name: MetricName) -> Option<&MetricSummary> {
        self.metrics.get(&name)
    }
}

/// Builds a summary from records ordered oldest first.
pub fn summarize(records: Vec<MetricRecord>) -> VitalsSummary {
    let mut metrics = BTreeMap::new();

    for name in SUMMARY_METRICS {
        let values: Vec<f64> = records
            .iter()
            .filter(|r| r.metric.name == name)
            .map(|r| r.metric.value)
            .collect();

        let Some(&latest) = values.last() else {
            continue;
        };

        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        metrics.insert(
            name,
            MetricSummary {
                samples: values.len(),
                avg: sum / values.len() as f64,
                min,
                max,
                latest,
                rating: rate(name, latest),
            },
        );
    }

    VitalsSummary {
        total_records: records.len(),
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::WebVitalsMetric;
    use approx::assert_relative_eq;
    use chrono::Utc;

    fn record(name: MetricName, value: f64) -> MetricRecord {
        MetricRecord {
            metric: WebVitalsMetric::new(name, value),
            timestamp: Utc::now(),
            url: "/".to_string(),
        }
    }

    #[test]
    fn test_empty() {
        let summary = summarize(Vec::new());
        assert_eq!(summary.total_records, 0);
        assert!(summary.metrics.is_empty());
    }

    #[test]
    fn test_statistics() {
        let summary = summarize(vec![
            record(MetricName::Lcp, 2000.0),
            record(MetricName::Lcp, 4500.0),
            record(MetricName::Fcp, 900.0),
            record(MetricName::Lcp, 3000.0),
        ]);

        let lcp = summary.get(MetricName::Lcp).unwrap();
        assert_eq!(lcp.samples, 3);
        assert_relative_eq!(lcp.avg, 9500.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(lcp.min, 2000.0);
        assert_relative_eq!(lcp.max, 4500.0);
        assert_relative_eq!(lcp.latest, 3000.0);
        assert_eq!(lcp.rating, Rating::NeedsImprovement);

        assert_eq!(summary.get(MetricName::Fcp).unwrap().rating, Rating::Good);
        assert!(summary.get(MetricName::Cls).is_none());
    }

    #[test]
    fn test_inp_is_not_summarised() {
        let summary = summarize(vec![record(MetricName::Inp, 600.0)]);
        assert_eq!(summary.total_records, 1);
        assert!(summary.metrics.is_empty());
    }
}

//! Bounded analytics log persisted in a key-value store.

use chrono::{DateTime, Utc};
use p29_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::budget::BudgetReport;
use crate::error::{VitalsError, VitalsResult};
use crate::metric::WebVitalsMetric;
use crate::summary::{summarize, VitalsSummary};

/// Key the analytics document is stored under.
pub const ANALYTICS_KEY: &str = "p29_analytics";

/// Maximum number of measurements retained.
pub const MAX_RECORDS: usize = 50;

/// A measurement together with when and where it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// The measurement.
    #[serde(flatten)]
    pub metric: WebVitalsMetric,
    /// When the measurement was recorded.
    pub timestamp: DateTime<Utc>,
    /// Page path the measurement came from.
    pub url: String,
}

/// The persisted analytics document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDocument {
    /// Retained measurements, oldest first.
    #[serde(default)]
    pub web_vitals: Vec<MetricRecord>,
    /// Whether the user declined tracking.
    #[serde(default)]
    pub has_opted_out: bool,
}

impl AnalyticsDocument {
    fn push(&mut self, record: MetricRecord) {
        self.web_vitals.push(record);
        if self.web_vitals.len() > MAX_RECORDS {
            let excess = self.web_vitals.len() - MAX_RECORDS;
            self.web_vitals.drain(..excess);
        }
    }
}

/// Analytics log over a key-value store.
pub struct AnalyticsLog<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> AnalyticsLog<'a> {
    /// Creates a log backed by `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Loads the persisted document, or an empty one if none is stored.
    pub fn document(&self) -> VitalsResult<AnalyticsDocument> {
        match self.store.get(ANALYTICS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| VitalsError::CorruptDocument(e.to_string())),
            None => Ok(AnalyticsDocument::default()),
        }
    }

    fn save(&self, document: &AnalyticsDocument) -> VitalsResult<()> {
        let raw = serde_json::to_string(document)
            .map_err(|e| VitalsError::Serialization(e.to_string()))?;
        self.store.set(ANALYTICS_KEY, &raw)?;
        Ok(())
    }

    /// Records `metric` for page `url`.
    ///
    /// Returns `false` without storing anything when the user has opted out.
    pub fn record(&self, metric: WebVitalsMetric, url: &str) -> VitalsResult<bool> {
        metric.validate()?;

        let mut document = self.document()?;
        if document.has_opted_out {
            info!("user has opted out of tracking");
            return Ok(false);
        }

        debug!(
            metric = %metric.name,
            value = %metric.name.format_value(metric.value),
            rating = %metric.rating,
            url,
            "recorded web vital"
        );

        document.push(MetricRecord {
            metric,
            timestamp: Utc::now(),
            url: url.to_string(),
        });
        self.save(&document)?;
        Ok(true)
    }

    /// Retained measurements, oldest first.
    pub fn records(&self) -> VitalsResult<Vec<MetricRecord>> {
        Ok(self.document()?.web_vitals)
    }

    /// Whether the user has opted out.
    pub fn is_opted_out(&self) -> VitalsResult<bool> {
        Ok(self.document()?.has_opted_out)
    }

    /// Stops recording. Existing measurements are kept.
    pub fn opt_out(&self) -> VitalsResult<()> {
        self.set_opt_out(true)
    }

    /// Resumes recording.
    pub fn opt_in(&self) -> VitalsResult<()> {
        self.set_opt_out(false)
    }

    fn set_opt_out(&self, opted_out: bool) -> VitalsResult<()> {
        let mut document = self.document()?;
        document.has_opted_out = opted_out;
        self.save(&document)
    }

    /// Discards all measurements, keeping the opt-out preference.
    pub fn clear(&self) -> VitalsResult<usize> {
        let mut document = self.document()?;
        let removed = document.web_vitals.len();
        document.web_vitals.clear();
        self.save(&document)?;
        Ok(removed)
    }

    /// Summarises the retained measurements.
    ///
    /// An unreadable document yields an empty summary.
    pub fn summary(&self) -> VitalsSummary {
        match self.records() {
            Ok(records) => summarize(records),
            Err(err) => {
                warn!(error = %err, "could not read web vitals");
                VitalsSummary::default()
            }
        }
    }

    /// Checks the latest measurements against the performance budget.
    pub fn check_budget(&self) -> BudgetReport {
        BudgetReport::check(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricName;
    use p29_storage::InMemoryStore;

    #[test]
    fn test_record_and_read_back() {
        let store = InMemoryStore::new();
        let log = AnalyticsLog::new(&store);

        assert!(log
            .record(WebVitalsMetric::new(MetricName::Fcp, 1200.0), "/")
            .unwrap());

        let records = log.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].metric.name, MetricName::Fcp);
        assert_eq!(records[0].url, "/");
    }

    #[test]
    fn test_buffer_keeps_newest_fifty() {
        let store = InMemoryStore::new();
        let log = AnalyticsLog::new(&store);

        for i in 0..60 {
            log.record(WebVitalsMetric::new(MetricName::Ttfb, f64::from(i)), "/faq")
                .unwrap();
        }

        let records = log.records().unwrap();
        assert_eq!(records.len(), MAX_RECORDS);
        assert_eq!(records.first().unwrap().metric.value, 10.0);
        assert_eq!(records.last().unwrap().metric.value, 59.0);
    }

    #[test]
    fn test_opt_out_blocks_recording() {
        let store = InMemoryStore::new();
        let log = AnalyticsLog::new(&store);

        log.opt_out().unwrap();
        assert!(log.is_opted_out().unwrap());
        assert!(!log
            .record(WebVitalsMetric::new(MetricName::Lcp, 2000.0), "/")
            .unwrap());
        assert!(log.records().unwrap().is_empty());

        log.opt_in().unwrap();
        assert!(log
            .record(WebVitalsMetric::new(MetricName::Lcp, 2000.0), "/")
            .unwrap());
    }

    #[test]
    fn test_clear_keeps_preference() {
        let store = InMemoryStore::new();
        let log = AnalyticsLog::new(&store);

        log.record(WebVitalsMetric::new(MetricName::Cls, 0.01), "/").unwrap();
        log.opt_out().unwrap();
        assert_eq!(log.clear().unwrap(), 1);
        assert!(log.records().unwrap().is_empty());
        assert!(log.is_opted_out().unwrap());
    }

    #[test]
    fn test_invalid_value_rejected() {
        let store = InMemoryStore::new();
        let log = AnalyticsLog::new(&store);
        let err = log
            .record(WebVitalsMetric::new(MetricName::Fid, -5.0), "/")
            .unwrap_err();
        assert!(matches!(err, VitalsError::InvalidValue { .. }));
    }

    #[test]
    fn test_corrupt_document() {
        let store = InMemoryStore::new();
        store.set(ANALYTICS_KEY, "{not json").unwrap();
        let log = AnalyticsLog::new(&store);

        assert!(matches!(
            log.records(),
            Err(VitalsError::CorruptDocument(_))
        ));
        assert!(log.summary().metrics.is_empty());
        assert!(log.check_budget().passed);
    }

    #[test]
    fn test_document_wire_format() {
        let store = InMemoryStore::new();
        let log = AnalyticsLog::new(&store);
        log.record(WebVitalsMetric::new(MetricName::Lcp, 1000.0), "/roles")
            .unwrap();

        let raw = store.get(ANALYTICS_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["hasOptedOut"], false);
        assert_eq!(json["webVitals"][0]["name"], "LCP");
        assert_eq!(json["webVitals"][0]["url"], "/roles");
        assert!(json["webVitals"][0]["timestamp"].is_string());
    }
}

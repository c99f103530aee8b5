//! # P29 Vitals
//!
//! Core Web Vitals bookkeeping for the P29 playbook site.
//!
//! - **Rating**: web.dev thresholds for CLS, FID, FCP, LCP, TTFB and INP
//! - **Analytics Log**: the newest 50 measurements, persisted through any
//!   [`p29_storage::KeyValueStore`], with an opt-out flag
//! - **Summary**: per-metric average, min, max and latest value
//! - **Budget**: pass/fail check of the latest values against targets
//!
//! ## Example
//!
//! ```rust
//! use p29_storage::InMemoryStore;
//! use p29_vitals::{AnalyticsLog, MetricName, Rating, WebVitalsMetric};
//!
//! let store = InMemoryStore::new();
//! let log = AnalyticsLog::new(&store);
//!
//! let metric = WebVitalsMetric::new(MetricName::Lcp, 3100.0);
//! assert_eq!(metric.rating, Rating::NeedsImprovement);
//! log.record(metric, "/roadmap").unwrap();
//!
//! let report = log.check_budget();
//! assert!(!report.passed);
//! assert_eq!(report.violations, vec!["LCP: 3100ms (target: <2500ms)".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod budget;
mod error;
mod log;
mod metric;
mod summary;

pub use budget::BudgetReport;
pub use error::{VitalsError, VitalsResult};
pub use log::{AnalyticsDocument, AnalyticsLog, MetricRecord, ANALYTICS_KEY, MAX_RECORDS};
pub use metric::{rate, MetricName, Rating, Threshold, WebVitalsMetric};
pub use summary::{summarize, MetricSummary, VitalsSummary, SUMMARY_METRICS};

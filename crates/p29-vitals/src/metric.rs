//! Metric names, thresholds and ratings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::VitalsError;

/// Tracked Core Web Vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricName {
    /// Cumulative Layout Shift (unitless)
    #[serde(rename = "CLS")]
    Cls,
    /// First Input Delay (ms)
    #[serde(rename = "FID")]
    Fid,
    /// First Contentful Paint (ms)
    #[serde(rename = "FCP")]
    Fcp,
    /// Largest Contentful Paint (ms)
    #[serde(rename = "LCP")]
    Lcp,
    /// Time to First Byte (ms)
    #[serde(rename = "TTFB")]
    Ttfb,
    /// Interaction to Next Paint (ms)
    #[serde(rename = "INP")]
    Inp,
}

impl MetricName {
    /// All metrics.
    pub const ALL: [MetricName; 6] = [
        MetricName::Cls,
        MetricName::Fid,
        MetricName::Fcp,
        MetricName::Lcp,
        MetricName::Ttfb,
        MetricName::Inp,
    ];

    /// Upper-case abbreviation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Cls => "CLS",
            MetricName::Fid => "FID",
            MetricName::Fcp => "FCP",
            MetricName::Lcp => "LCP",
            MetricName::Ttfb => "TTFB",
            MetricName::Inp => "INP",
        }
    }

    /// Unit suffix for display (`ms`, or empty for CLS).
    pub fn unit(&self) -> &'static str {
        match self {
            MetricName::Cls => "",
            _ => "ms",
        }
    }

    /// Rating thresholds from web.dev.
    pub fn threshold(&self) -> Threshold {
        match self {
            MetricName::Cls => Threshold::new(0.1, 0.25),
            MetricName::Fid => Threshold::new(100.0, 300.0),
            MetricName::Fcp => Threshold::new(1800.0, 3000.0),
            MetricName::Lcp => Threshold::new(2500.0, 4000.0),
            MetricName::Ttfb => Threshold::new(800.0, 1800.0),
            MetricName::Inp => Threshold::new(200.0, 500.0),
        }
    }

    /// Formats `value` with the precision and unit used in reports.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            MetricName::Cls => format!("{value:.3}"),
            _ => format!("{value:.0}ms"),
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricName {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLS" => Ok(MetricName::Cls),
            "FID" => Ok(MetricName::Fid),
            "FCP" => Ok(MetricName::Fcp),
            "LCP" => Ok(MetricName::Lcp),
            "TTFB" => Ok(MetricName::Ttfb),
            "INP" => Ok(MetricName::Inp),
            _ => Err(VitalsError::UnknownMetric(s.to_string())),
        }
    }
}

/// Good / poor boundaries for a metric. Both bounds are inclusive of the
/// better rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// Values at or below this are good.
    pub good: f64,
    /// Values at or below this (and above `good`) need improvement.
    pub poor: f64,
}

impl Threshold {
    const fn new(good: f64, poor: f64) -> Self {
        Self { good, poor }
    }
}

/// Qualitative rating of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    /// Within the good threshold.
    Good,
    /// Between the good and poor thresholds.
    NeedsImprovement,
    /// Beyond the poor threshold.
    Poor,
}

impl Rating {
    /// Short status marker for terminal output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rating::Good => "✓",
            Rating::NeedsImprovement => "⚠",
            Rating::Poor => "✗",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rating::Good => "good",
            Rating::NeedsImprovement => "needs-improvement",
            Rating::Poor => "poor",
        };
        write!(f, "{name}")
    }
}

/// Rates `value` against the thresholds for `name`.
pub fn rate(name: MetricName, value: f64) -> Rating {
    let threshold = name.threshold();
    if value <= threshold.good {
        Rating::Good
    } else if value <= threshold.poor {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}

/// A single measurement as reported by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebVitalsMetric {
    /// Which vital was measured.
    pub name: MetricName,
    /// Measured value.
    pub value: f64,
    /// Rating derived from `value`.
    pub rating: Rating,
    /// Change since the previous report of this metric.
    pub delta: f64,
    /// Unique measurement id.
    pub id: String,
    /// Navigation type the measurement belongs to.
    pub navigation_type: String,
}

impl WebVitalsMetric {
    /// Creates a first-report measurement for a normal navigation.
    pub fn new(name: MetricName, value: f64) -> Self {
        Self {
            name,
            value,
            rating: rate(name, value),
            delta: value,
            id: format!("{}-{}", name.as_str().to_lowercase(), Uuid::new_v4()),
            navigation_type: "navigate".to_string(),
        }
    }

    /// Validates that the value is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), VitalsError> {
        if self.value.is_finite() && self.value >= 0.0 {
            Ok(())
        } else {
            Err(VitalsError::InvalidValue {
                metric: self.name.to_string(),
                value: self.value,
            })
        }
    }
}

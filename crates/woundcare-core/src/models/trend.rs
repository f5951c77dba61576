use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metrics::HealthMetric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendTag {
    Improving,
    Stable,
    Worsening,
    /// No prior record exists for the subject.
    InsufficientHistory,
}

impl TrendTag {
    pub fn label(self) -> &'static str {
        match self {
            TrendTag::Improving => "improving",
            TrendTag::Stable => "stable",
            TrendTag::Worsening => "worsening",
            TrendTag::InsufficientHistory => "insufficient history",
        }
    }
}

/// Signed change of one health metric since the previous record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricTrend {
    /// `current - previous`.
    pub delta: f64,
    pub tag: TrendTag,
}

/// Change since the previous record for the same subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendRecord {
    pub area_pct: MetricTrend,
    pub redness_score: MetricTrend,
    pub exudate_ratio: MetricTrend,
    /// Relative change of `area_pct`, in percent of the previous value.
    pub area_change_pct: f64,
    /// Raw deltas kept for explanation text only.
    pub brightness_delta: f64,
    pub blur_delta: f64,
}

impl TrendRecord {
    pub fn metric(&self, metric: HealthMetric) -> &MetricTrend {
        match metric {
            HealthMetric::Area => &self.area_pct,
            HealthMetric::Redness => &self.redness_score,
            HealthMetric::Exudate => &self.exudate_ratio,
        }
    }

    pub fn tag(&self, metric: HealthMetric) -> TrendTag {
        self.metric(metric).tag
    }

    /// Health metrics tagged as worsening, in [`HealthMetric::ALL`] order.
    pub fn worsening(&self) -> Vec<HealthMetric> {
        HealthMetric::ALL
            .into_iter()
            .filter(|m| self.tag(*m) == TrendTag::Worsening)
            .collect()
    }

    pub fn worsening_count(&self) -> usize {
        self.worsening().len()
    }
}

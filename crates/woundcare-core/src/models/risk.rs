use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metrics::{HealthMetric, MetricSet};
use super::quality::QualityFlags;
use super::trend::{TrendRecord, TrendTag};

/// Clinical-style status, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskStatus {
    Stable,
    Monitor,
    Concerning,
    Urgent,
}

impl RiskStatus {
    pub const ALL: [RiskStatus; 4] = [Self::Stable, Self::Monitor, Self::Concerning, Self::Urgent];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Monitor => "Monitor",
            Self::Concerning => "Concerning",
            Self::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a classification rule. Stable across releases; downstream
/// consumers key clinician-facing explanations on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleId {
    UrgentRedness,
    UrgentExudate,
    UrgentMultiMetricWorsening,
    ConcerningRedness,
    ConcerningExudate,
    ConcerningSingleMetricWorsening,
    MonitorRednessBorderline,
    MonitorExudateBorderline,
    MonitorAreaBorderline,
    MonitorImageQuality,
    QualityAdvisory,
    StableDefault,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UrgentRedness => "urgent_redness",
            Self::UrgentExudate => "urgent_exudate",
            Self::UrgentMultiMetricWorsening => "urgent_multi_metric_worsening",
            Self::ConcerningRedness => "concerning_redness",
            Self::ConcerningExudate => "concerning_exudate",
            Self::ConcerningSingleMetricWorsening => "concerning_single_metric_worsening",
            Self::MonitorRednessBorderline => "monitor_redness_borderline",
            Self::MonitorExudateBorderline => "monitor_exudate_borderline",
            Self::MonitorAreaBorderline => "monitor_area_borderline",
            Self::MonitorImageQuality => "monitor_image_quality",
            Self::QualityAdvisory => "quality_advisory",
            Self::StableDefault => "stable_default",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one classification call.
///
/// Built once and handed to report, UI and history collaborators. Fields are
/// read-only; `triggered_rules` and `rationale` are parallel sequences in
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    status: RiskStatus,
    triggered_rules: Vec<RuleId>,
    rationale: Vec<String>,
    quality: QualityFlags,
    metrics: MetricSet,
    trend: Option<TrendRecord>,
}

impl RiskResult {
    pub fn new(
        status: RiskStatus,
        matches: Vec<(RuleId, String)>,
        quality: QualityFlags,
        metrics: MetricSet,
        trend: Option<TrendRecord>,
    ) -> Self {
        let (triggered_rules, rationale) = matches.into_iter().unzip();
        Self {
            status,
            triggered_rules,
            rationale,
            quality,
            metrics,
            trend,
        }
    }

    pub fn status(&self) -> RiskStatus {
        self.status
    }

    pub fn triggered_rules(&self) -> &[RuleId] {
        &self.triggered_rules
    }

    pub fn rationale(&self) -> &[String] {
        &self.rationale
    }

    pub fn quality(&self) -> QualityFlags {
        self.quality
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn trend(&self) -> Option<&TrendRecord> {
        self.trend.as_ref()
    }

    /// Trend tag for a metric, or `InsufficientHistory` when there was no
    /// prior record.
    pub fn trend_tag(&self, metric: HealthMetric) -> TrendTag {
        self.trend
            .as_ref()
            .map_or(TrendTag::InsufficientHistory, |t| t.tag(metric))
    }

    pub fn has_rule(&self, rule: RuleId) -> bool {
        self.triggered_rules.contains(&rule)
    }
}

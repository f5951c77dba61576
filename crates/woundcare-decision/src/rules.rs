//! The ordered rule table behind [`crate::classify`].
//!
//! Rules are grouped by the status they produce, most severe first. The
//! classifier walks the table top-down; the first rule that matches fixes the
//! status, and the remaining rules of that same status are still checked so
//! every reason for it lands in the rationale.

use woundcare_core::config::ClassifierConfig;
use woundcare_core::models::metrics::{HealthMetric, MetricSet};
use woundcare_core::models::quality::QualityFlags;
use woundcare_core::models::risk::{RiskStatus, RuleId};
use woundcare_core::models::trend::TrendRecord;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub metrics: &'a MetricSet,
    pub trend: Option<&'a TrendRecord>,
    pub quality: QualityFlags,
    pub config: &'a ClassifierConfig,
}

/// A predicate paired with the status it yields. `check` returns the
/// rationale line when the rule matches.
pub struct Rule {
    pub id: RuleId,
    pub status: RiskStatus,
    check: fn(&RuleInput<'_>) -> Option<String>,
}

impl Rule {
    pub fn evaluate(&self, input: &RuleInput<'_>) -> Option<String> {
        (self.check)(input)
    }
}

pub static RULES: [Rule; 11] = [
    Rule {
        id: RuleId::UrgentRedness,
        status: RiskStatus::Urgent,
        check: urgent_redness,
    },
    Rule {
        id: RuleId::UrgentExudate,
        status: RiskStatus::Urgent,
        check: urgent_exudate,
    },
    Rule {
        id: RuleId::UrgentMultiMetricWorsening,
        status: RiskStatus::Urgent,
        check: multi_metric_worsening,
    },
    Rule {
        id: RuleId::ConcerningRedness,
        status: RiskStatus::Concerning,
        check: concerning_redness,
    },
    Rule {
        id: RuleId::ConcerningExudate,
        status: RiskStatus::Concerning,
        check: concerning_exudate,
    },
    Rule {
        id: RuleId::ConcerningSingleMetricWorsening,
        status: RiskStatus::Concerning,
        check: single_metric_worsening,
    },
    Rule {
        id: RuleId::MonitorRednessBorderline,
        status: RiskStatus::Monitor,
        check: borderline_redness,
    },
    Rule {
        id: RuleId::MonitorExudateBorderline,
        status: RiskStatus::Monitor,
        check: borderline_exudate,
    },
    Rule {
        id: RuleId::MonitorAreaBorderline,
        status: RiskStatus::Monitor,
        check: borderline_area,
    },
    Rule {
        id: RuleId::MonitorImageQuality,
        status: RiskStatus::Monitor,
        check: unreliable_image,
    },
    Rule {
        id: RuleId::StableDefault,
        status: RiskStatus::Stable,
        check: stable_default,
    },
];

pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Rationale line appended when a poor-quality image still classified above
/// Monitor.
pub fn quality_advisory(quality: QualityFlags) -> String {
    format!(
        "low image quality ({}) — recommend retake",
        quality.issues().join(", ")
    )
}

// ── Urgent ──────────────────────────────────────────────

fn urgent_redness(input: &RuleInput<'_>) -> Option<String> {
    let (value, threshold) = (
        input.metrics.redness_score,
        input.config.urgent_redness_threshold,
    );
    (value >= threshold).then(|| format!("redness {value:.2} ≥ urgent threshold {threshold:.2}"))
}

fn urgent_exudate(input: &RuleInput<'_>) -> Option<String> {
    let (value, threshold) = (
        input.metrics.exudate_ratio,
        input.config.urgent_exudate_threshold,
    );
    (value >= threshold)
        .then(|| format!("exudate ratio {value:.3} ≥ urgent threshold {threshold:.3}"))
}

fn multi_metric_worsening(input: &RuleInput<'_>) -> Option<String> {
    let worsening = input.trend?.worsening();
    (worsening.len() >= 2).then(|| {
        format!(
            "{} metrics worsening since last record: {}",
            worsening.len(),
            labels(&worsening)
        )
    })
}

// ── Concerning ──────────────────────────────────────────

fn concerning_redness(input: &RuleInput<'_>) -> Option<String> {
    let (value, threshold) = (
        input.metrics.redness_score,
        input.config.concerning_redness_threshold,
    );
    (value >= threshold)
        .then(|| format!("redness {value:.2} ≥ concerning threshold {threshold:.2}"))
}

fn concerning_exudate(input: &RuleInput<'_>) -> Option<String> {
    let (value, threshold) = (
        input.metrics.exudate_ratio,
        input.config.concerning_exudate_threshold,
    );
    (value >= threshold)
        .then(|| format!("exudate ratio {value:.3} ≥ concerning threshold {threshold:.3}"))
}

fn single_metric_worsening(input: &RuleInput<'_>) -> Option<String> {
    let trend = input.trend?;
    match trend.worsening().as_slice() {
        [metric] => {
            let delta = trend.metric(*metric).delta;
            Some(format!(
                "{} worsening since last record (delta {delta:+.3})",
                metric.label()
            ))
        }
        _ => None,
    }
}

// ── Monitor ─────────────────────────────────────────────

fn borderline_redness(input: &RuleInput<'_>) -> Option<String> {
    let value = input.metrics.redness_score;
    let (low, high) = (
        input.config.monitor_redness_threshold,
        input.config.concerning_redness_threshold,
    );
    (value >= low).then(|| format!("redness {value:.2} in borderline band [{low:.2}, {high:.2})"))
}

fn borderline_exudate(input: &RuleInput<'_>) -> Option<String> {
    let value = input.metrics.exudate_ratio;
    let (low, high) = (
        input.config.monitor_exudate_threshold,
        input.config.concerning_exudate_threshold,
    );
    (value >= low)
        .then(|| format!("exudate ratio {value:.3} in borderline band [{low:.3}, {high:.3})"))
}

fn borderline_area(input: &RuleInput<'_>) -> Option<String> {
    let (value, threshold) = (input.metrics.area_pct, input.config.monitor_area_pct);
    (value >= threshold)
        .then(|| format!("wound area {value:.1}% ≥ monitoring threshold {threshold:.1}%"))
}

fn unreliable_image(input: &RuleInput<'_>) -> Option<String> {
    input
        .quality
        .is_unreliable()
        .then(|| quality_advisory(input.quality))
}

// ── Stable ──────────────────────────────────────────────

fn stable_default(_input: &RuleInput<'_>) -> Option<String> {
    Some("all metrics within normal bands and no worsening trend".to_string())
}

fn labels(metrics: &[HealthMetric]) -> String {
    metrics
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ")
}

use woundcare_core::config::ClassifierConfig;
use woundcare_core::models::metrics::MetricSet;
use woundcare_core::models::quality::QualityFlags;
use woundcare_core::models::risk::{RiskResult, RiskStatus, RuleId};
use woundcare_core::models::trend::TrendRecord;

use crate::rules::{self, RuleInput};

/// Classify one assessment with the ordered rule cascade.
///
/// Total and deterministic: every input maps to exactly one status, and the
/// same input always yields the same rules and rationale text. A trend of
/// `None` (first record for the subject) can never trigger the trend rules.
pub fn classify(
    metrics: &MetricSet,
    trend: Option<&TrendRecord>,
    quality: QualityFlags,
    config: &ClassifierConfig,
) -> RiskResult {
    let input = RuleInput {
        metrics,
        trend,
        quality,
        config,
    };

    let mut status: Option<RiskStatus> = None;
    let mut matches = Vec::new();
    for rule in rules::rules() {
        if status.is_some_and(|s| s != rule.status) {
            break;
        }
        if let Some(rationale) = rule.evaluate(&input) {
            status = Some(rule.status);
            matches.push((rule.id, rationale));
        }
    }
    let status = status.unwrap_or(RiskStatus::Stable);

    if quality.is_unreliable() && status > RiskStatus::Monitor {
        matches.push((RuleId::QualityAdvisory, rules::quality_advisory(quality)));
    }

    tracing::debug!(
        %status,
        rules = ?matches.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(),
        "classified"
    );

    RiskResult::new(status, matches, quality, *metrics, trend.copied())
}

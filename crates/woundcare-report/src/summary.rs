use std::future::Future;

use serde::{Deserialize, Serialize};
use woundcare_core::models::context::PatientContext;
use woundcare_core::models::risk::RiskResult;

use crate::error::ReportError;
use crate::render::render_template;
use crate::templates;

/// Something that can write a free-text summary for a finished assessment,
/// typically a language model behind an HTTP API.
///
/// Invoked only after classification, with a shared reference, so it cannot
/// influence the status it describes.
pub trait SummaryGenerator: Send + Sync {
    fn generate(
        &self,
        result: &RiskResult,
        context: Option<&PatientContext>,
    ) -> impl Future<Output = Result<String, ReportError>> + Send;
}

/// Placeholder for "no generator configured". Always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGenerator;

impl SummaryGenerator for NoGenerator {
    async fn generate(
        &self,
        _result: &RiskResult,
        _context: Option<&PatientContext>,
    ) -> Result<String, ReportError> {
        Err(ReportError::GeneratorUnavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub source: SummarySource,
}

/// Summary text for a result, falling back to the per-status template when
/// the generator is absent, errors, or returns only whitespace.
pub async fn summarize<G: SummaryGenerator>(
    generator: Option<&G>,
    result: &RiskResult,
    context: Option<&PatientContext>,
) -> Summary {
    if let Some(generator) = generator {
        match generator.generate(result, context).await {
            Ok(text) if !text.trim().is_empty() => {
                return Summary {
                    text: text.trim().to_string(),
                    source: SummarySource::Generated,
                };
            }
            Ok(_) => tracing::warn!("summary generator returned empty text, using fallback"),
            Err(ReportError::GeneratorUnavailable) => {
                tracing::debug!("summary generator unavailable, using fallback")
            }
            Err(e) => tracing::warn!(error = %e, "summary generator failed, using fallback"),
        }
    }

    Summary {
        text: fallback_summary(result),
        source: SummarySource::Fallback,
    }
}

#[derive(Serialize)]
struct FallbackContext<'a> {
    headline: &'static str,
    rationale: &'a [String],
    steps: &'static [&'static str],
}

/// The static per-status summary. Never fails; a template error degrades to
/// the bare headline.
pub fn fallback_summary(result: &RiskResult) -> String {
    let data = FallbackContext {
        headline: templates::status_headline(result.status()),
        rationale: result.rationale(),
        steps: templates::next_steps(result.status()),
    };
    match render_template(
        templates::FALLBACK_SUMMARY_NAME,
        templates::FALLBACK_SUMMARY,
        &data,
    ) {
        Ok(text) => text.trim_end().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "fallback summary template failed");
            data.headline.to_string()
        }
    }
}

/// Prompt text a generator can send to a language model. Lists the status,
/// metrics, trend, rationale and any patient context.
pub fn prompt(result: &RiskResult, context: Option<&PatientContext>) -> String {
    let m = result.metrics();
    let mut parts = vec![
        "You are a concise clinician assistant. Given wound image analysis metrics and patient context, produce:".to_string(),
        "1) A short (2-4 sentence) summary explaining the current wound status in plain language.".to_string(),
        "2) Up to 4 suggested next steps (bullet list).".to_string(),
        "Do not contradict the status below; it was decided by fixed clinical rules.".to_string(),
        String::new(),
        format!("Status: {}", result.status()),
        "Metrics:".to_string(),
        format!("- area_pct: {:.2}", m.area_pct),
        format!("- redness_score: {:.3}", m.redness_score),
        format!("- exudate_ratio: {:.3}", m.exudate_ratio),
        format!("- brightness_score: {:.3}", m.brightness_score),
        format!("- blur_score: {:.1}", m.blur_score),
    ];

    if let Some(trend) = result.trend() {
        parts.push("Trend since previous record:".to_string());
        for metric in woundcare_core::models::metrics::HealthMetric::ALL {
            let t = trend.metric(metric);
            parts.push(format!("- {}: {} ({:+.3})", metric.label(), t.tag.label(), t.delta));
        }
    }

    parts.push("Reasons:".to_string());
    parts.extend(result.rationale().iter().map(|r| format!("- {r}")));

    if let Some(context) = context.filter(|c| !c.is_empty()) {
        parts.push("Patient context:".to_string());
        parts.extend(context.fields().into_iter().map(|(k, v)| format!("- {k}: {v}")));
    }

    parts.push(String::new());
    parts.push("Write the summary now:".to_string());
    parts.join("\n")
}

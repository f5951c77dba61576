use serde::Serialize;
use woundcare_core::models::context::PatientContext;
use woundcare_core::models::metrics::HealthMetric;
use woundcare_core::models::risk::RiskResult;

use crate::error::ReportError;
use crate::render::render_template;
use crate::summary::Summary;
use crate::templates;

#[derive(Serialize)]
struct TrendLine {
    label: &'static str,
    tag: &'static str,
    delta: String,
}

#[derive(Serialize)]
struct RuleLine<'a> {
    id: &'static str,
    rationale: &'a str,
}

#[derive(Serialize)]
struct ContextLine {
    name: &'static str,
    value: String,
}

// Numbers are formatted here; Tera has no fixed-precision filter.
#[derive(Serialize)]
struct ReportData<'a> {
    subject_id: &'a str,
    generated_at: Option<String>,
    status: &'static str,
    area_px: u64,
    area_pct: String,
    redness_score: String,
    exudate_ratio: String,
    brightness_score: String,
    blur_score: String,
    quality_issues: Vec<&'static str>,
    trend: Option<Vec<TrendLine>>,
    rules: Vec<RuleLine<'a>>,
    context: Vec<ContextLine>,
    summary: Option<&'a str>,
}

/// Plain-text clinician report. Rationale lines are reproduced verbatim and
/// in evaluation order.
pub fn render_report(
    result: &RiskResult,
    subject_id: &str,
    generated_at: Option<jiff::Timestamp>,
    context: Option<&PatientContext>,
    summary: Option<&Summary>,
) -> Result<String, ReportError> {
    let m = result.metrics();
    let data = ReportData {
        subject_id,
        generated_at: generated_at.map(|t| t.to_string()),
        status: result.status().label(),
        area_px: m.area_px,
        area_pct: format!("{:.2}", m.area_pct),
        redness_score: format!("{:.3}", m.redness_score),
        exudate_ratio: format!("{:.3}", m.exudate_ratio),
        brightness_score: format!("{:.3}", m.brightness_score),
        blur_score: format!("{:.1}", m.blur_score),
        quality_issues: result.quality().issues(),
        trend: result.trend().map(|trend| {
            HealthMetric::ALL
                .into_iter()
                .map(|metric| {
                    let t = trend.metric(metric);
                    TrendLine {
                        label: metric.label(),
                        tag: t.tag.label(),
                        delta: format!("{:+.3}", t.delta),
                    }
                })
                .collect()
        }),
        rules: result
            .triggered_rules()
            .iter()
            .zip(result.rationale())
            .map(|(id, rationale)| RuleLine {
                id: id.as_str(),
                rationale,
            })
            .collect(),
        context: context
            .map(|c| {
                c.fields()
                    .into_iter()
                    .map(|(name, value)| ContextLine { name, value })
                    .collect()
            })
            .unwrap_or_default(),
        summary: summary.map(|s| s.text.as_str()),
    };

    render_template(templates::REPORT_NAME, templates::REPORT, &data)
}

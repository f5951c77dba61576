use woundcare_core::models::context::PatientContext;
use woundcare_core::models::metrics::MetricSet;
use woundcare_core::models::quality::QualityFlags;
use woundcare_core::models::risk::{RiskResult, RiskStatus, RuleId};
use woundcare_core::models::trend::{MetricTrend, TrendRecord, TrendTag};
use woundcare_report::render::render_template;
use woundcare_report::summary::{fallback_summary, prompt};
use woundcare_report::{
    NoGenerator, ReportError, Summary, SummaryGenerator, SummarySource, render_report, summarize,
};

fn metrics(redness: f64) -> MetricSet {
    MetricSet {
        area_px: 4_200,
        area_pct: 9.0,
        redness_score: redness,
        exudate_ratio: 0.02,
        brightness_score: 0.61,
        blur_score: 180.0,
    }
}

fn urgent() -> RiskResult {
    RiskResult::new(
        RiskStatus::Urgent,
        vec![(
            RuleId::UrgentRedness,
            "redness 0.60 ≥ urgent threshold 0.55".to_string(),
        )],
        QualityFlags::default(),
        metrics(0.60),
        None,
    )
}

fn stable() -> RiskResult {
    RiskResult::new(
        RiskStatus::Stable,
        vec![(
            RuleId::StableDefault,
            "all metrics within normal bands and no worsening trend".to_string(),
        )],
        QualityFlags::default(),
        metrics(0.10),
        None,
    )
}

struct Fixed(&'static str);

impl SummaryGenerator for Fixed {
    async fn generate(
        &self,
        _result: &RiskResult,
        _context: Option<&PatientContext>,
    ) -> Result<String, ReportError> {
        Ok(self.0.to_string())
    }
}

struct Failing;

impl SummaryGenerator for Failing {
    async fn generate(
        &self,
        _result: &RiskResult,
        _context: Option<&PatientContext>,
    ) -> Result<String, ReportError> {
        Err(ReportError::Generator("upstream timed out".into()))
    }
}

#[tokio::test]
async fn generated_text_is_used_when_available() {
    let result = urgent();
    let summary = summarize(Some(&Fixed("  Seek care today.\n")), &result, None).await;
    assert_eq!(
        summary,
        Summary {
            text: "Seek care today.".to_string(),
            source: SummarySource::Generated,
        }
    );
}

#[tokio::test]
async fn missing_failing_or_blank_generator_falls_back() {
    let result = urgent();
    let expected = fallback_summary(&result);

    let none = summarize::<NoGenerator>(None, &result, None).await;
    let unavailable = summarize(Some(&NoGenerator), &result, None).await;
    let failing = summarize(Some(&Failing), &result, None).await;
    let blank = summarize(Some(&Fixed("   \n")), &result, None).await;

    for summary in [none, unavailable, failing, blank] {
        assert_eq!(summary.source, SummarySource::Fallback);
        assert_eq!(summary.text, expected);
    }
}

#[tokio::test]
async fn summarizing_never_alters_the_result() {
    let result = urgent();
    let before = result.clone();
    let _ = summarize(Some(&Failing), &result, None).await;
    let _ = summarize(Some(&Fixed("All good")), &result, None).await;
    assert_eq!(result, before);
    assert_eq!(result.status(), RiskStatus::Urgent);
}

#[test]
fn fallback_text_follows_status() {
    let urgent = fallback_summary(&urgent());
    assert!(urgent.starts_with(
        "Status: URGENT. Recommend immediate clinician review; consider in-person evaluation."
    ));
    assert!(urgent.contains("- redness 0.60 ≥ urgent threshold 0.55"));
    assert!(urgent.contains("go to emergency care"));

    let stable = fallback_summary(&stable());
    assert!(stable.starts_with(
        "Status: Stable. Continue current wound care and follow up as scheduled."
    ));
    assert!(stable.contains("Suggested next steps:"));
}

#[test]
fn report_lists_rules_verbatim_and_context() {
    let context = PatientContext {
        age: Some(64),
        diabetes: Some(true),
        pain: Some(6),
        notes: Some("  dressing changed yesterday ".into()),
    };
    let summary = Summary {
        text: "Seek care today.".into(),
        source: SummarySource::Generated,
    };
    let report = render_report(&urgent(), "foot-ulcer", None, Some(&context), Some(&summary))
        .expect("report renders");

    assert!(report.contains("Subject: foot-ulcer"));
    assert!(report.contains("Status: Urgent"));
    assert!(report.contains("[urgent_redness] redness 0.60 ≥ urgent threshold 0.55"));
    assert!(report.contains("Redness:       0.600"));
    assert!(report.contains("No previous record."));
    assert!(report.contains("diabetes: yes"));
    assert!(report.contains("pain: 6/10"));
    assert!(report.contains("notes: dressing changed yesterday"));
    assert!(report.contains("Seek care today."));
    assert!(!report.contains("Generated:"));
}

#[test]
fn report_shows_trend_and_quality_issues() {
    let trend = TrendRecord {
        area_pct: MetricTrend {
            delta: 4.0,
            tag: TrendTag::Worsening,
        },
        redness_score: MetricTrend {
            delta: -0.01,
            tag: TrendTag::Stable,
        },
        exudate_ratio: MetricTrend {
            delta: 0.0,
            tag: TrendTag::Stable,
        },
        area_change_pct: 80.0,
        brightness_delta: 0.0,
        blur_delta: 0.0,
    };
    let result = RiskResult::new(
        RiskStatus::Concerning,
        vec![(
            RuleId::ConcerningSingleMetricWorsening,
            "area worsening since last record (delta +4.000)".to_string(),
        )],
        QualityFlags {
            is_blurry: true,
            ..QualityFlags::default()
        },
        metrics(0.10),
        Some(trend),
    );

    let at = jiff::Timestamp::UNIX_EPOCH;
    let report = render_report(&result, "knee", Some(at), None, None).expect("report renders");
    assert!(report.contains("area: worsening (+4.000)"));
    assert!(report.contains("redness: stable (-0.010)"));
    assert!(report.contains("Image quality: blurry"));
    assert!(report.contains("Generated: 1970-01-01T00:00:00Z"));
    assert!(!report.contains("No previous record."));
}

#[test]
fn prompt_carries_status_and_context() {
    let context = PatientContext {
        age: Some(70),
        ..PatientContext::default()
    };
    let text = prompt(&urgent(), Some(&context));
    assert!(text.contains("Status: Urgent"));
    assert!(text.contains("- redness 0.60 ≥ urgent threshold 0.55"));
    assert!(text.contains("- age: 70"));
    assert!(!text.contains("Trend since previous record"));
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_template("broken.txt", "{% if %}", &serde_json::json!({}))
        .expect_err("parse error");
    assert!(matches!(err, ReportError::TemplateParse(_)), "{err:?}");
}

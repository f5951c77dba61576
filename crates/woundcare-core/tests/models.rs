use woundcare_core::keys::{subject_history, validate_subject_id};
use woundcare_core::models::context::PatientContext;
use woundcare_core::models::history::HistoryEntry;
use woundcare_core::models::metrics::{HealthMetric, MetricSet};
use woundcare_core::models::quality::QualityFlags;
use woundcare_core::models::risk::{RiskResult, RiskStatus, RuleId};
use woundcare_core::models::trend::TrendTag;

fn nominal_metrics() -> MetricSet {
    MetricSet {
        area_px: 1200,
        area_pct: 4.5,
        redness_score: 0.12,
        exudate_ratio: 0.01,
        brightness_score: 0.55,
        blur_score: 240.0,
    }
}

#[test]
fn status_severity_order() {
    assert!(RiskStatus::Stable < RiskStatus::Monitor);
    assert!(RiskStatus::Monitor < RiskStatus::Concerning);
    assert!(RiskStatus::Concerning < RiskStatus::Urgent);
    assert_eq!(RiskStatus::ALL.iter().max(), Some(&RiskStatus::Urgent));
}

#[test]
fn rule_ids_serialize_as_snake_case() {
    let json = serde_json::to_string(&RuleId::ConcerningSingleMetricWorsening).unwrap();
    assert_eq!(json, "\"concerning_single_metric_worsening\"");
    assert_eq!(RuleId::UrgentRedness.to_string(), "urgent_redness");
}

#[test]
fn result_without_trend_reports_insufficient_history() {
    let result = RiskResult::new(
        RiskStatus::Stable,
        vec![(RuleId::StableDefault, "ok".to_string())],
        QualityFlags::default(),
        nominal_metrics(),
        None,
    );

    for metric in HealthMetric::ALL {
        assert_eq!(result.trend_tag(metric), TrendTag::InsufficientHistory);
    }
    assert_eq!(result.triggered_rules(), &[RuleId::StableDefault]);
    assert_eq!(result.rationale(), &["ok".to_string()]);
    assert!(result.has_rule(RuleId::StableDefault));
}

#[test]
fn quality_issues_listed_in_fixed_order() {
    let flags = QualityFlags {
        is_blurry: true,
        is_underexposed: false,
        is_overexposed: true,
    };
    assert!(flags.is_unreliable());
    assert_eq!(flags.issues(), vec!["blurry", "overexposed"]);
    assert!(!QualityFlags::default().is_unreliable());
}

#[test]
fn history_entry_json_line_round_trip() {
    let result = RiskResult::new(
        RiskStatus::Monitor,
        vec![(RuleId::MonitorImageQuality, "blurry".to_string())],
        QualityFlags {
            is_blurry: true,
            ..QualityFlags::default()
        },
        nominal_metrics(),
        None,
    );
    let context = PatientContext {
        age: Some(67),
        diabetes: Some(true),
        ..PatientContext::default()
    };
    let entry = HistoryEntry::from_result("patient-7", &result, Some(context));

    let line = entry.to_json_line().unwrap();
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);

    let parsed = HistoryEntry::from_json_line(&line).unwrap();
    assert_eq!(parsed, entry);
    assert_eq!(parsed.status, RiskStatus::Monitor);
    assert_eq!(parsed.triggered_rules, vec![RuleId::MonitorImageQuality]);
    assert_eq!(parsed.rationale, vec!["blurry".to_string()]);
    assert_eq!(parsed.image_path, None);
}

#[test]
fn history_entry_records_source_photo() {
    let result = RiskResult::new(
        RiskStatus::Stable,
        vec![(RuleId::StableDefault, "nominal".to_string())],
        QualityFlags::default(),
        nominal_metrics(),
        None,
    );
    let entry = HistoryEntry::from_result("p2", &result, None).with_image_path("photos/day3.jpg");
    assert_eq!(entry.image_path.as_deref(), Some("photos/day3.jpg"));

    let line = entry.to_json_line().unwrap();
    assert!(line.contains(r#""image_path":"photos/day3.jpg""#));
    assert!(line.contains(r#""triggered_rules":["stable_default"]"#));
}

#[test]
fn history_line_without_rules_still_parses() {
    let line = r#"{"id":"7f1c0a52-3d5e-4b8e-9a57-2b0c4e6f9d11","subject_id":"p3","recorded_at":"2025-03-01T10:00:00Z","metrics":{"area_px":0,"area_pct":0.0,"redness_score":0.0,"exudate_ratio":0.0,"brightness_score":0.5,"blur_score":100.0},"status":"Stable"}"#;
    let entry = HistoryEntry::from_json_line(line).unwrap();
    assert!(entry.triggered_rules.is_empty());
    assert!(entry.rationale.is_empty());
    assert_eq!(entry.image_path, None);
    assert_eq!(entry.context, None);
}

#[test]
fn empty_context_is_not_stored() {
    let result = RiskResult::new(
        RiskStatus::Stable,
        vec![],
        QualityFlags::default(),
        MetricSet::zeroed(),
        None,
    );
    let entry = HistoryEntry::from_result("p1", &result, Some(PatientContext::default()));
    assert!(entry.context.is_none());
}

#[test]
fn context_fields_skip_blank_notes() {
    let context = PatientContext {
        age: None,
        diabetes: Some(false),
        pain: Some(4),
        notes: Some("   ".to_string()),
    };
    assert_eq!(
        context.fields(),
        vec![("diabetes", "no".to_string()), ("pain", "4/10".to_string())]
    );
}

#[test]
fn subject_ids_validated() {
    assert!(validate_subject_id("patient-42_left.heel").is_ok());
    assert!(validate_subject_id("").is_err());
    assert!(validate_subject_id("../etc/passwd").is_err());
    assert!(validate_subject_id(".hidden").is_err());
    assert!(validate_subject_id("a/b").is_err());
    assert!(validate_subject_id(&"x".repeat(129)).is_err());
}

#[test]
fn subject_history_key() {
    assert_eq!(subject_history("p1"), "subjects/p1.jsonl");
}

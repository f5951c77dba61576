use uuid::Uuid;
use woundcare_core::history::{HistoryAccessError, HistoryAccessor};
use woundcare_core::models::context::PatientContext;
use woundcare_core::models::history::HistoryEntry;
use woundcare_core::models::metrics::MetricSet;
use woundcare_core::models::quality::QualityFlags;
use woundcare_core::models::risk::{RiskResult, RiskStatus, RuleId};
use woundcare_storage::error::StorageError;
use woundcare_storage::{FileHistoryStore, MemoryHistoryStore};

fn entry(subject_id: &str, seconds: i64, area_pct: f64) -> HistoryEntry {
    HistoryEntry {
        id: Uuid::new_v4(),
        subject_id: subject_id.to_string(),
        recorded_at: jiff::Timestamp::from_second(seconds).expect("valid timestamp"),
        metrics: MetricSet {
            area_pct,
            ..MetricSet::zeroed()
        },
        status: RiskStatus::Stable,
        triggered_rules: vec![RuleId::StableDefault],
        rationale: vec!["all metrics within normal bands and no worsening trend".to_string()],
        image_path: None,
        context: None,
    }
}

#[tokio::test]
async fn append_then_list_round_trips_in_time_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path());

    let mut later = entry("leg-ulcer", 2_000, 7.5);
    later.context = Some(PatientContext {
        age: Some(71),
        diabetes: Some(true),
        ..PatientContext::default()
    });
    let earlier = entry("leg-ulcer", 1_000, 9.0);
    store.append(&later).await.expect("append");
    store.append(&earlier).await.expect("append");

    let entries = store.list("leg-ulcer").await.expect("list");
    assert_eq!(entries, vec![earlier, later.clone()]);
    assert_eq!(store.latest("leg-ulcer").await.expect("latest"), Some(later));

    let path = dir.path().join("subjects").join("leg-ulcer.jsonl");
    let contents = std::fs::read_to_string(path).expect("history file");
    assert_eq!(contents.lines().count(), 2);
}

#[tokio::test]
async fn stored_entry_keeps_rules_rationale_and_photo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path());

    let result = RiskResult::new(
        RiskStatus::Urgent,
        vec![
            (
                RuleId::UrgentRedness,
                "redness 0.61 ≥ urgent threshold 0.55".to_string(),
            ),
            (
                RuleId::UrgentExudate,
                "exudate ratio 0.340 ≥ urgent threshold 0.300".to_string(),
            ),
        ],
        QualityFlags::default(),
        MetricSet {
            area_pct: 12.0,
            redness_score: 0.61,
            exudate_ratio: 0.34,
            ..MetricSet::zeroed()
        },
        None,
    );
    let entry = HistoryEntry::from_result("ankle", &result, None)
        .with_image_path("/photos/ankle-2025-03-02.jpg");
    store.append(&entry).await.expect("append");

    let stored = store.latest("ankle").await.expect("latest").expect("entry");
    assert_eq!(stored, entry);
    assert_eq!(stored.status, RiskStatus::Urgent);
    assert_eq!(
        stored.triggered_rules,
        vec![RuleId::UrgentRedness, RuleId::UrgentExudate]
    );
    assert_eq!(stored.rationale, result.rationale());
    assert_eq!(
        stored.image_path.as_deref(),
        Some("/photos/ankle-2025-03-02.jpg")
    );
}

#[tokio::test]
async fn unknown_subject_has_no_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path());

    assert!(store.list("never-seen").await.expect("list").is_empty());
    let latest = store.get_latest("never-seen").await.expect("not a fault");
    assert_eq!(latest, None);
}

#[tokio::test]
async fn corrupt_line_is_a_fault_not_an_empty_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path());
    store.append(&entry("heel", 1_000, 3.0)).await.expect("append");

    let path = store.path_for("heel").expect("path");
    let mut contents = std::fs::read_to_string(&path).expect("read");
    contents.push_str("{not json\n");
    std::fs::write(&path, contents).expect("write");

    match store.list("heel").await {
        Err(StorageError::Corrupt { subject_id, line, .. }) => {
            assert_eq!(subject_id, "heel");
            assert_eq!(line, 2);
        }
        other => panic!("expected corrupt history, got {other:?}"),
    }

    let err = store.get_latest("heel").await.expect_err("fault");
    assert!(matches!(err, HistoryAccessError::Corrupt { .. }), "{err:?}");
}

#[tokio::test]
async fn path_traversal_subject_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path());

    let err = store.list("../outside").await.expect_err("invalid subject");
    assert!(matches!(err, StorageError::InvalidSubject(_)), "{err:?}");

    let err = store
        .append(&entry("a/b", 1_000, 1.0))
        .await
        .expect_err("invalid subject");
    assert!(matches!(err, StorageError::InvalidSubject(_)), "{err:?}");
}

#[tokio::test]
async fn memory_store_returns_most_recent_by_timestamp() {
    let store = MemoryHistoryStore::new();
    store.append(entry("sacrum", 3_000, 4.0));
    store.append(entry("sacrum", 1_000, 6.0));

    let latest = store.get_latest("sacrum").await.expect("latest").expect("entry");
    assert_eq!(latest.metrics.area_pct, 4.0);
    assert_eq!(store.list("sacrum").len(), 2);
    assert_eq!(store.get_latest("other").await.expect("latest"), None);
}

use chrono::{NaiveDate, Utc};

use dream_core::models::{
    Confidence, CycleMetrics, EvolutionSummary, HeritageDna, Hypothesis, HypothesisCategory,
    MorningReport,
};
use dream_core::{DreamError, DreamStore, StorageError};
use dream_storage::{JsonStore, MemoryStore};

fn hypothesis(statement: &str, user_id: &str) -> Hypothesis {
    Hypothesis::new(
        user_id,
        statement,
        HypothesisCategory::Behavioral,
        Confidence::new(0.6),
    )
}

fn report(user_id: &str, date: NaiveDate) -> MorningReport {
    MorningReport {
        user_id: user_id.to_string(),
        date,
        hypotheses: vec![],
        patterns: vec![],
        conflicts: vec![],
        evolution: EvolutionSummary::default(),
        insights: vec![],
        recommendations: vec!["Keep engaging".to_string()],
        wisdom: "No clear signal".to_string(),
        quality_score: Confidence::new(0.2),
        metrics: CycleMetrics::default(),
        generated_at: Utc::now(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn memory_store_round_trips_hypotheses_per_user() {
    let store = MemoryStore::new();
    let a = hypothesis("User is most active during morning hours", "alice");
    let b = hypothesis("User tends toward quick decisions", "bob");
    store.put_hypothesis(&a).unwrap();
    store.put_hypothesis(&b).unwrap();

    assert_eq!(store.all_hypotheses().unwrap().len(), 2);
    let alices = store.hypotheses_for_user("alice").unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].id, a.id);
    assert_eq!(store.get_hypothesis(&b.id).unwrap().unwrap().user_id, "bob");
}

#[test]
fn memory_store_rejects_duplicate_reports() {
    let store = MemoryStore::new();
    let d = date(2026, 8, 25);
    store.put_report(&report("alice", d)).unwrap();

    let err = store.put_report(&report("alice", d)).unwrap_err();
    assert!(matches!(
        err,
        DreamError::Storage(StorageError::ImmutableReport { .. })
    ));
}

#[test]
fn memory_store_latest_report_picks_newest_date() {
    let store = MemoryStore::new();
    store.put_report(&report("alice", date(2026, 8, 23))).unwrap();
    store.put_report(&report("alice", date(2026, 8, 25))).unwrap();
    store.put_report(&report("alice", date(2026, 8, 24))).unwrap();
    store.put_report(&report("bob", date(2026, 8, 26))).unwrap();

    let latest = store.latest_report("alice").unwrap().unwrap();
    assert_eq!(latest.date, date(2026, 8, 25));
}

#[test]
fn json_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let a = hypothesis("User is most active during morning hours", "alice");
    let mut dna = HeritageDna::new("alice");
    dna.cognitive.insert("routine_consistency".to_string(), 0.7);

    {
        let store = JsonStore::open(dir.path()).unwrap();
        store.put_hypothesis(&a).unwrap();
        store.put_dna(&dna).unwrap();
        store.put_report(&report("alice", date(2026, 8, 25))).unwrap();
    }

    let store = JsonStore::open(dir.path()).unwrap();
    assert_eq!(store.get_hypothesis(&a.id).unwrap().unwrap().statement, a.statement);
    let loaded = store.get_dna("alice").unwrap().unwrap();
    assert_eq!(loaded.cognitive["routine_consistency"], 0.7);
    assert_eq!(
        store.latest_report("alice").unwrap().unwrap().date,
        date(2026, 8, 25)
    );
}

#[test]
fn json_store_reports_are_immutable() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).unwrap();
    let d = date(2026, 8, 25);
    store.put_report(&report("alice", d)).unwrap();

    let err = store.put_report(&report("alice", d)).unwrap_err();
    assert!(matches!(
        err,
        DreamError::Storage(StorageError::ImmutableReport { .. })
    ));
    // The original survives.
    assert!(store.get_report("alice", d).unwrap().is_some());
}

#[test]
fn json_store_missing_keys_read_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).unwrap();

    assert!(store.get_hypothesis("nope").unwrap().is_none());
    assert!(store.get_dna("nope").unwrap().is_none());
    assert!(store.get_report("nope", date(2026, 1, 1)).unwrap().is_none());
    assert!(store.latest_report("nope").unwrap().is_none());
}

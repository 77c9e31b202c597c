//! Integration tests for the hypothesis lifecycle.

use dream_core::models::{
    Confidence, Hypothesis, HypothesisCategory, HypothesisStatus, InteractionRecord, Pattern,
    PatternType,
};
use dream_hypothesis::{overlap, HypothesisManager};

fn pattern(pattern_type: PatternType, description: &str, window: &str, conf: f64) -> Pattern {
    Pattern {
        pattern_type,
        description: description.to_string(),
        confidence: Confidence::new(conf),
        frequency: 5,
        window: window.to_string(),
        evidence: vec!["rec-a".to_string()],
    }
}

// A candidate statement with ~70% key-token overlap to an existing active
// hypothesis must fold into it: validation_count +1, confidence bumped by
// the fixed increment, no new row.
#[test]
fn high_overlap_restatement_folds_into_existing_row() {
    let manager = HypothesisManager::default();
    let mut table = vec![Hypothesis::new(
        "creator",
        "User shows a recurring joy emotional tone",
        HypothesisCategory::Emotional,
        Confidence::new(0.6),
    )];

    // Same template family, one key token changed.
    let restatement = pattern(
        PatternType::Emotional,
        "Recurring joy emotional warmth",
        "daily",
        0.5,
    );
    let existing = &table[0].statement.clone();
    let candidate = "User shows a recurring joy emotional warmth";
    let ratio = overlap::statement_overlap(existing, candidate);
    assert!(ratio > 0.6 && ratio < 0.8, "ratio was {ratio}");

    let stats = manager.ingest_patterns("creator", &[restatement], &mut table);
    assert_eq!(table.len(), 1);
    assert!(stats.created.is_empty());
    assert_eq!(table[0].validation_count, 1);
    assert!((table[0].confidence.value() - 0.65).abs() < 1e-9);
}

// Repeated supporting evidence plus restatements push an active hypothesis
// over the promotion bar once enough validations accumulate.
#[test]
fn sustained_support_promotes_to_validated() {
    let manager = HypothesisManager::default();
    let mut table = Vec::new();
    let p = pattern(
        PatternType::Temporal,
        "Consistently active during morning hours",
        "morning",
        0.85,
    );
    // Three restatements: validation_count 3, confidence 0.85 + 3×0.05 = 1.0.
    manager.ingest_patterns("creator", &[p.clone()], &mut table);
    for _ in 0..3 {
        manager.ingest_patterns("creator", &[p.clone()], &mut table);
    }

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].status, HypothesisStatus::Validated);
    assert_eq!(table[0].validation_count, 3);
    assert_eq!(table[0].confidence.value(), 1.0);
}

// Once archived, the same statement never silently returns to active; a
// genuinely novel statement still creates a fresh row.
#[test]
fn archived_hypotheses_stay_archived() {
    let manager = HypothesisManager::default();
    let mut table = Vec::new();
    let p = pattern(
        PatternType::Temporal,
        "Consistently active during morning hours",
        "morning",
        0.31,
    );
    manager.ingest_patterns("creator", &[p.clone()], &mut table);

    // Drive it below the archival threshold.
    let contradicting = InteractionRecord::new(
        "creator",
        "honestly I am never active in the morning",
        "neutral",
        "chat",
    );
    manager.validate_against(&[contradicting], &mut table);
    assert_eq!(table[0].status, HypothesisStatus::Archived);

    // The identical pattern arrives again: no resurrection, no new row.
    let stats = manager.ingest_patterns("creator", &[p], &mut table);
    assert_eq!(table.len(), 1);
    assert!(stats.created.is_empty() && stats.updated.is_empty());
    assert_eq!(table[0].status, HypothesisStatus::Archived);

    // A different window is a new creation event.
    let evening = pattern(
        PatternType::Temporal,
        "Consistently active during evening hours",
        "evening",
        0.7,
    );
    let stats = manager.ingest_patterns("creator", &[evening], &mut table);
    assert_eq!(stats.created.len(), 1);
    assert_eq!(table.len(), 2);
}

// Supporting evidence nudges confidence up by the fixed step per record.
#[test]
fn supporting_evidence_raises_confidence() {
    let manager = HypothesisManager::default();
    let mut table = vec![Hypothesis::new(
        "creator",
        "User is most active during morning hours",
        HypothesisCategory::Behavioral,
        Confidence::new(0.5),
    )];

    let records = vec![
        InteractionRecord::new("creator", "my morning walk was great", "joy", "chat"),
        InteractionRecord::new("creator", "morning pages done early", "calm", "journal"),
    ];
    manager.validate_against(&records, &mut table);

    assert!((table[0].confidence.value() - 0.54).abs() < 1e-9);
    assert_eq!(table[0].evidence.len(), 2);
}

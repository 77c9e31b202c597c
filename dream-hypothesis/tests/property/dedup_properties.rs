use proptest::prelude::*;

use dream_core::models::{Confidence, Pattern, PatternType};
use dream_hypothesis::HypothesisManager;

fn temporal_pattern(confidence: f64) -> Pattern {
    Pattern {
        pattern_type: PatternType::Temporal,
        description: "Consistently active during morning hours".to_string(),
        confidence: Confidence::new(confidence),
        frequency: 6,
        window: "morning".to_string(),
        evidence: vec![],
    }
}

proptest! {
    #[test]
    fn repeated_ingest_never_duplicates(
        confidences in prop::collection::vec(0.31f64..=1.0, 1..15),
    ) {
        let manager = HypothesisManager::default();
        let mut table = Vec::new();
        for confidence in confidences {
            manager.ingest_patterns(
                "creator",
                &[temporal_pattern(confidence)],
                &mut table,
            );
            // Restatements fold; the row count stays at one as long as
            // the hypothesis remains active.
            let active = table.iter().filter(|h| h.is_active()).count();
            prop_assert!(table.len() <= 2);
            prop_assert!(active <= 1);
        }
    }

    #[test]
    fn confidence_stays_bounded_under_any_ingest_sequence(
        confidences in prop::collection::vec(0.0f64..=1.0, 1..25),
    ) {
        let manager = HypothesisManager::default();
        let mut table = Vec::new();
        for confidence in confidences {
            manager.ingest_patterns(
                "creator",
                &[temporal_pattern(confidence)],
                &mut table,
            );
            for hypothesis in &table {
                let value = hypothesis.confidence.value();
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }
}

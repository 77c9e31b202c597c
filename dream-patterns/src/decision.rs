//! Decision-style patterns: quick vs deliberate classification.

use dream_core::config::DetectorConfig;
use dream_core::models::{Confidence, InteractionRecord, Pattern, PatternType};

use crate::lexicon::Lexicon;

/// Among records containing a decision cue, classify each as quick or
/// deliberate and emit whichever style is strictly more frequent. The
/// confidence is a fixed moderate constant: the signal is coarse. A tie
/// emits nothing.
pub fn detect(
    batch: &[InteractionRecord],
    lexicon: &Lexicon,
    config: &DetectorConfig,
) -> Vec<Pattern> {
    let mut quick: Vec<String> = Vec::new();
    let mut deliberate: Vec<String> = Vec::new();

    for record in batch {
        let content = record.content.to_lowercase();
        if Lexicon::match_count(&content, &lexicon.decision_cues) == 0 {
            continue;
        }
        let quick_hits = Lexicon::match_count(&content, &lexicon.quick_markers);
        let deliberate_hits = Lexicon::match_count(&content, &lexicon.deliberate_markers);
        if quick_hits > deliberate_hits {
            quick.push(record.id.clone());
        } else if deliberate_hits > quick_hits {
            deliberate.push(record.id.clone());
        }
        // Equal marker counts classify neither way.
    }

    let (style, evidence) = if quick.len() > deliberate.len() {
        ("quick", quick)
    } else if deliberate.len() > quick.len() {
        ("deliberate", deliberate)
    } else {
        return Vec::new();
    };

    vec![Pattern {
        pattern_type: PatternType::Decision,
        description: format!("Tends toward {style} decisions"),
        confidence: Confidence::new(config.decision_confidence),
        frequency: evidence.len() as u32,
        window: "overall".to_string(),
        evidence,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> InteractionRecord {
        InteractionRecord::new("creator", content, "neutral", "chat")
    }

    #[test]
    fn quick_majority_wins_with_fixed_confidence() {
        let batch = vec![
            record("I had to decide and went with my gut"),
            record("Made the choice immediately"),
            record("Big decision, I want to think it over"),
        ];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert_eq!(patterns.len(), 1);
        let p = &patterns[0];
        assert!(p.description.contains("quick"));
        assert_eq!(p.confidence.value(), 0.7);
        assert_eq!(p.frequency, 2);
    }

    #[test]
    fn tie_emits_nothing() {
        let batch = vec![
            record("I had to decide and went with my gut"),
            record("Big decision, I want to think it over"),
        ];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert!(patterns.is_empty());
    }

    #[test]
    fn non_decision_records_are_ignored() {
        let batch = vec![record("my gut feels immediately better")];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert!(patterns.is_empty());
    }
}

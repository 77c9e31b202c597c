//! Emotional patterns: keyword-share analysis across the batch.

use std::collections::BTreeMap;

use dream_core::config::DetectorConfig;
use dream_core::models::{Confidence, InteractionRecord, Pattern, PatternType};

use crate::lexicon::Lexicon;

/// Count emotion-keyword matches per category and emit a pattern for any
/// category whose normalized share of all matches exceeds the threshold.
///
/// A category tied in match count with another category is discarded:
/// an ambiguous signal is dropped, not guessed at.
pub fn detect(
    batch: &[InteractionRecord],
    lexicon: &Lexicon,
    config: &DetectorConfig,
) -> Vec<Pattern> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut evidence: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for record in batch {
        let content = record.content.to_lowercase();
        for (category, terms) in &lexicon.emotions {
            let hits = Lexicon::match_count(&content, terms);
            if hits > 0 {
                *counts.entry(category.as_str()).or_default() += hits;
                evidence
                    .entry(category.as_str())
                    .or_default()
                    .push(record.id.clone());
            }
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut patterns = Vec::new();
    for (category, count) in &counts {
        let share = *count as f64 / total as f64;
        if share <= config.emotion_share_threshold {
            continue;
        }
        // Tie with any other category means the signal is ambiguous.
        let tied = counts
            .iter()
            .any(|(other, c)| other != category && c == count);
        if tied {
            continue;
        }
        patterns.push(Pattern {
            pattern_type: PatternType::Emotional,
            description: format!("Recurring {category} emotional tone"),
            confidence: Confidence::new(share),
            frequency: *count as u32,
            window: "daily".to_string(),
            evidence: evidence.get(category).cloned().unwrap_or_default(),
        });
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> InteractionRecord {
        InteractionRecord::new("creator", content, "neutral", "chat")
    }

    #[test]
    fn dominant_category_emits_with_share_confidence() {
        let batch = vec![
            record("I'm so happy and excited today"),
            record("What a wonderful morning, I love it"),
            record("Feeling glad about the news"),
            record("A bit worried about work"),
        ];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert_eq!(patterns.len(), 1);
        let p = &patterns[0];
        assert!(p.description.contains("joy"));
        // 5 joy hits out of 6 total.
        assert!(p.confidence.value() > 0.8);
    }

    #[test]
    fn tied_categories_emit_nothing() {
        let batch = vec![
            record("so happy today"),
            record("so sad today"),
        ];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert!(patterns.is_empty());
    }

    #[test]
    fn no_keywords_no_pattern() {
        let batch = vec![record("the weather report said rain")];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert!(patterns.is_empty());
    }
}

//! Communication-style patterns: indicator density per style.

use dream_core::config::DetectorConfig;
use dream_core::models::{Confidence, InteractionRecord, Pattern, PatternType};

use crate::lexicon::Lexicon;

/// Emit a pattern for every style whose indicator density (records with at
/// least one indicator ÷ total records) reaches the configured ratio.
/// Confidence is density plus a fixed 0.3 base, capped at 1.0.
pub fn detect(
    batch: &[InteractionRecord],
    lexicon: &Lexicon,
    config: &DetectorConfig,
) -> Vec<Pattern> {
    if batch.is_empty() {
        return Vec::new();
    }

    let mut patterns = Vec::new();
    for (style, terms) in &lexicon.communication {
        let matching: Vec<&InteractionRecord> = batch
            .iter()
            .filter(|r| Lexicon::match_count(&r.content.to_lowercase(), terms) > 0)
            .collect();
        let density = matching.len() as f64 / batch.len() as f64;
        if density >= config.communication_density_threshold {
            patterns.push(Pattern {
                pattern_type: PatternType::Communication,
                description: format!("Communication style leans {style}"),
                confidence: Confidence::new(density + 0.3),
                frequency: matching.len() as u32,
                window: "overall".to_string(),
                evidence: matching.iter().map(|r| r.id.clone()).collect(),
            });
        }
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
    fn dense_analytical_style_is_detected() {
        let batch = vec![
            record("I chose this because it was cheaper"),
            record("Let me compare the two options"),
            record("Therefore the second plan wins"),
            record("Nothing much today"),
        ];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert_eq!(patterns.len(), 1);
        assert!(patterns[0].description.contains("analytical"));
        // density 0.75 + 0.3 base, capped.
        assert_eq!(patterns[0].confidence.value(), 1.0);
    }

    #[test]
    fn sparse_indicators_emit_nothing() {
        let batch = vec![
            record("I chose this because it was cheaper"),
            record("ok"),
            record("fine"),
            record("sure"),
            record("yes"),
        ];
        let patterns = detect(&batch, &Lexicon::default(), &DetectorConfig::default());
        assert!(patterns.is_empty());
    }
}

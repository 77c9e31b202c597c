//! Deterministic recommendations from the cycle's patterns.

use dream_core::models::{Pattern, PatternType};

const ENCOURAGEMENT: &str = "Keep engaging; every interaction sharpens the picture.";

/// One recommendation per pattern type, driven by that type's strongest
/// pattern, plus a closing encouragement line. Always non-empty.
pub fn recommendations(patterns: &[Pattern]) -> Vec<String> {
    let mut out = Vec::new();

    for pattern_type in PatternType::ALL {
        let dominant = patterns
            .iter()
            .filter(|p| p.pattern_type == pattern_type)
            .max_by(|a, b| a.confidence.value().total_cmp(&b.confidence.value()));
        if let Some(pattern) = dominant {
            out.push(recommendation_for(pattern));
        }
    }

    out.push(ENCOURAGEMENT.to_string());
    out
}

fn recommendation_for(pattern: &Pattern) -> String {
    match pattern.pattern_type {
        PatternType::Temporal => format!(
            "Schedule demanding work during your {} hours, when you are most engaged",
            pattern.window
        ),
        PatternType::Emotional => format!(
            "Take note of what sustains it: {}",
            decapitalize(&pattern.description)
        ),
        PatternType::Communication => format!(
            "Lean into your strengths: {}",
            decapitalize(&pattern.description)
        ),
        PatternType::Decision => format!(
            "Give big choices a second look: {}",
            decapitalize(&pattern.description)
        ),
    }
}

fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dream_core::models::Confidence;

    fn pattern(pattern_type: PatternType, description: &str, confidence: f64) -> Pattern {
        Pattern {
            pattern_type,
            description: description.to_string(),
            confidence: Confidence::new(confidence),
            frequency: 4,
            window: "morning".to_string(),
            evidence: vec![],
        }
    }

    #[test]
    fn no_patterns_still_yields_the_encouragement_line() {
        let recs = recommendations(&[]);
        assert_eq!(recs, vec![ENCOURAGEMENT.to_string()]);
    }

    #[test]
    fn one_recommendation_per_pattern_type() {
        let patterns = vec![
            pattern(PatternType::Temporal, "Consistently active during morning hours", 0.9),
            pattern(PatternType::Temporal, "Consistently active during evening hours", 0.4),
            pattern(PatternType::Decision, "Tends toward quick decisions", 0.7),
        ];
        let recs = recommendations(&patterns);
        // Two types present plus the encouragement line.
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("morning"));
        assert!(recs[1].contains("quick"));
    }
}

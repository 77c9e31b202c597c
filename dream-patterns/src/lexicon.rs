//! Data-driven keyword tables for the rule-based detectors.
//!
//! The built-in lists live in `Default`; callers can deserialize a
//! replacement table to swap vocabularies without touching detector code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word lists backing the emotional, communication, and decision detectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Emotion category → keywords.
    pub emotions: BTreeMap<String, Vec<String>>,
    /// Communication style → indicator words.
    pub communication: BTreeMap<String, Vec<String>>,
    /// Phrases that mark a record as decision-related.
    pub decision_cues: Vec<String>,
    /// Markers of quick, gut-driven decisions.
    pub quick_markers: Vec<String>,
    /// Markers of slow, deliberate decisions.
    pub deliberate_markers: Vec<String>,
}

impl Lexicon {
    /// True if the lower-cased content contains the term. Terms may be
    /// multi-word phrases.
    pub fn matches(content_lower: &str, term: &str) -> bool {
        content_lower.contains(term)
    }

    /// Count how many terms from the list occur in the content.
    pub fn match_count(content_lower: &str, terms: &[String]) -> usize {
        terms
            .iter()
            .filter(|t| Self::matches(content_lower, t))
            .count()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut emotions = BTreeMap::new();
        emotions.insert(
            "joy".to_string(),
            words(&["happy", "glad", "excited", "wonderful", "love", "enjoy"]),
        );
        emotions.insert(
            "sadness".to_string(),
            words(&["sad", "down", "lonely", "miss", "cry", "grief"]),
        );
        emotions.insert(
            "stress".to_string(),
            words(&["stressed", "anxious", "worried", "overwhelmed", "pressure"]),
        );
        emotions.insert(
            "calm".to_string(),
            words(&["calm", "peaceful", "relaxed", "content", "settled"]),
        );

        let mut communication = BTreeMap::new();
        communication.insert(
            "direct".to_string(),
            words(&["just", "exactly", "simply", "clearly", "straight", "plainly"]),
        );
        communication.insert(
            "expressive".to_string(),
            words(&["feel", "feeling", "felt", "heart", "deeply", "emotion"]),
        );
        communication.insert(
            "analytical".to_string(),
            words(&[
                "because",
                "therefore",
                "consider",
                "compare",
                "reason",
                "analyze",
            ]),
        );

        Self {
            emotions,
            communication,
            decision_cues: words(&[
                "decide", "decision", "choice", "choose", "should i", "picking",
            ]),
            quick_markers: words(&[
                "quick",
                "instant",
                "right away",
                "immediately",
                "gut",
                "impulse",
            ]),
            deliberate_markers: words(&[
                "deliberate",
                "think it over",
                "weigh",
                "pros and cons",
                "careful",
                "sleep on it",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_populated() {
        let lex = Lexicon::default();
        assert!(lex.emotions.len() >= 4);
        assert_eq!(lex.communication.len(), 3);
        assert!(!lex.decision_cues.is_empty());
    }

    #[test]
    fn phrase_matching() {
        assert!(Lexicon::matches("i should i guess sleep on it", "sleep on it"));
        assert!(!Lexicon::matches("slept fine", "sleep on it"));
    }

    #[test]
    fn lexicon_round_trips_through_json() {
        let lex = Lexicon::default();
        let raw = serde_json::to_string(&lex).unwrap();
        let back: Lexicon = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.emotions.len(), lex.emotions.len());
    }
}

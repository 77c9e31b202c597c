//! Token-set overlap and negation helpers for statement matching.
//!
//! Restatement detection ([`statement_overlap`]) deliberately compares
//! *key* tokens — words of four or more characters with template
//! scaffolding removed — rather than raw whitespace token sets. Raw sets
//! would score opposing statements that share a template ("morning" vs
//! "evening" hours, "quick" vs "deliberate" decisions) above the dedup
//! threshold and merge claims that must instead coexist and be weighed
//! by the conflict detector. [`token_overlap`] keeps the raw-set ratio
//! for callers that want it.

use std::collections::BTreeSet;

/// Tokens shorter than this carry no signal for key-token extraction.
const MIN_KEY_TOKEN_LEN: usize = 4;

/// Common statement scaffolding words, excluded from key tokens.
const STOPWORDS: [&str; 12] = [
    "user", "most", "during", "hours", "with", "that", "this", "shows", "style", "tends",
    "toward", "often",
];

/// Single-token negation markers.
const NEGATION_TOKENS: [&str; 3] = ["not", "never", "rarely"];

/// Lower-cased word set of a statement, punctuation trimmed.
pub fn token_set(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Overlap ratio |A ∩ B| / max(|A|, |B|) between two statements' token
/// sets. Returns 0.0 when either side is empty.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);
    let max_len = set_a.len().max(set_b.len());
    if max_len == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / max_len as f64
}

/// Overlap ratio between the content-bearing (key) tokens of two
/// statements. Template scaffolding ("User is most active during …") is
/// excluded so that opposing statements sharing a template — morning vs
/// evening hours, quick vs deliberate decisions — do not register as
/// restatements of each other. Falls back to full token sets when either
/// side has no key tokens.
pub fn statement_overlap(a: &str, b: &str) -> f64 {
    let keys_a: BTreeSet<String> = key_tokens(a).into_iter().collect();
    let keys_b: BTreeSet<String> = key_tokens(b).into_iter().collect();
    let max_len = keys_a.len().max(keys_b.len());
    if max_len == 0 {
        return token_overlap(a, b);
    }
    let intersection = keys_a.intersection(&keys_b).count();
    intersection as f64 / max_len as f64
}

/// Content-bearing tokens of a hypothesis statement, used when scanning
/// records for supporting or contradicting evidence.
pub fn key_tokens(statement: &str) -> Vec<String> {
    token_set(statement)
        .into_iter()
        .filter(|t| t.len() >= MIN_KEY_TOKEN_LEN && !STOPWORDS.contains(&t.as_str()))
        .collect()
}

/// True if the lower-cased content carries a negation marker.
pub fn contains_negation(content_lower: &str) -> bool {
    if content_lower.contains("no longer") {
        return true;
    }
    token_set(content_lower)
        .iter()
        .any(|t| NEGATION_TOKENS.contains(&t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_statements_overlap_fully() {
        let s = "User is most active during morning hours";
        assert!((token_overlap(s, s) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn restatement_overlap_is_high() {
        let a = "User is most active during morning hours";
        let b = "user is most active during early morning hours";
        assert!(token_overlap(a, b) > 0.6);
    }

    #[test]
    fn unrelated_statements_overlap_low() {
        let a = "User is most active during morning hours";
        let b = "User tends toward deliberate decisions";
        assert!(token_overlap(a, b) < 0.3);
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(token_overlap("", "anything"), 0.0);
    }

    #[test]
    fn opposing_template_statements_are_not_restatements() {
        let a = "User is most active during morning hours";
        let b = "User is most active during evening hours";
        assert!(token_overlap(a, b) > 0.6, "raw sets overlap heavily");
        assert!(statement_overlap(a, b) <= 0.6, "key sets must not");

        let a = "User tends toward quick decisions";
        let b = "User tends toward deliberate decisions";
        assert!(statement_overlap(a, b) <= 0.6);
    }

    #[test]
    fn key_tokens_drop_scaffolding() {
        let keys = key_tokens("User is most active during morning hours");
        assert!(keys.contains(&"morning".to_string()));
        assert!(keys.contains(&"active".to_string()));
        assert!(!keys.contains(&"user".to_string()));
        assert!(!keys.contains(&"hours".to_string()));
    }

    #[test]
    fn negation_is_token_level() {
        assert!(contains_negation("i am not a morning person"));
        assert!(contains_negation("i no longer enjoy mornings"));
        // "nothing" contains "not" as a substring but is not a negation.
        assert!(!contains_negation("nothing beats a morning walk"));
    }
}

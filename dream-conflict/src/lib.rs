//! # dream-conflict
//!
//! Finds pairs of active hypotheses whose statements are lexically
//! contradictory, using a fixed lexicon of opposing concept-word pairs.
//! Conflicts are recomputed every cycle and surfaced in the morning
//! report; detection is symmetric by construction (each unordered pair is
//! visited once) and a hypothesis never conflicts with itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dream_core::models::{Confidence, Conflict, ConflictType, Hypothesis};
use dream_hypothesis::overlap::token_set;

/// One opposing concept pair: a statement hitting side A contradicts a
/// statement hitting side B.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OppositionPair {
    pub side_a: Vec<String>,
    pub side_b: Vec<String>,
    pub conflict_type: ConflictType,
    /// Short label used in conflict descriptions.
    pub label: String,
}

impl OppositionPair {
    fn new(side_a: &[&str], side_b: &[&str], conflict_type: ConflictType, label: &str) -> Self {
        Self {
            side_a: side_a.iter().map(|w| w.to_string()).collect(),
            side_b: side_b.iter().map(|w| w.to_string()).collect(),
            conflict_type,
            label: label.to_string(),
        }
    }
}

/// The built-in opposition lexicon.
pub fn default_oppositions() -> Vec<OppositionPair> {
    vec![
        OppositionPair::new(
            &["prefers", "likes", "enjoys", "loves"],
            &["dislikes", "avoids", "hates", "resents"],
            ConflictType::Preference,
            "preference polarity",
        ),
        OppositionPair::new(
            &["morning", "dawn", "early"],
            &["evening", "night", "late"],
            ConflictType::Temporal,
            "time-of-day",
        ),
        OppositionPair::new(
            &["quick", "impulsive", "immediate"],
            &["deliberate", "careful", "slow"],
            ConflictType::DecisionStyle,
            "decision tempo",
        ),
        OppositionPair::new(
            &["direct", "blunt", "straightforward"],
            &["indirect", "subtle", "guarded"],
            ConflictType::General,
            "communication register",
        ),
        OppositionPair::new(
            &["social", "outgoing", "gregarious"],
            &["solitary", "reserved", "withdrawn"],
            ConflictType::General,
            "social orientation",
        ),
    ]
}

/// Pairwise conflict detector over a set of hypotheses.
pub struct ConflictDetector {
    oppositions: Vec<OppositionPair>,
}

impl ConflictDetector {
    pub fn new(oppositions: Vec<OppositionPair>) -> Self {
        Self { oppositions }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_oppositions())
    }

    /// Scan every unordered pair of *active* hypotheses and emit at most
    /// one conflict per pair. Severity is the average of the two
    /// confidences.
    pub fn detect(&self, hypotheses: &[Hypothesis]) -> Vec<Conflict> {
        let active: Vec<&Hypothesis> = hypotheses.iter().filter(|h| h.is_active()).collect();
        let mut conflicts = Vec::new();

        for i in 0..active.len() {
            for j in (i + 1)..active.len() {
                if let Some(conflict) = self.check_pair(active[i], active[j]) {
                    conflicts.push(conflict);
                }
            }
        }

        debug!(
            active = active.len(),
            conflicts = conflicts.len(),
            "conflict detection pass complete"
        );
        conflicts
    }

    fn check_pair(&self, a: &Hypothesis, b: &Hypothesis) -> Option<Conflict> {
        let tokens_a = token_set(&a.statement);
        let tokens_b = token_set(&b.statement);

        for opposition in &self.oppositions {
            let a_hits_a = opposition.side_a.iter().any(|w| tokens_a.contains(w));
            let a_hits_b = opposition.side_b.iter().any(|w| tokens_a.contains(w));
            let b_hits_a = opposition.side_a.iter().any(|w| tokens_b.contains(w));
            let b_hits_b = opposition.side_b.iter().any(|w| tokens_b.contains(w));

            // Opposite sides in either direction.
            if (a_hits_a && b_hits_b) || (a_hits_b && b_hits_a) {
                let severity =
                    Confidence::new((a.confidence.value() + b.confidence.value()) / 2.0);
                return Some(Conflict::new(
                    a.id.clone(),
                    b.id.clone(),
                    opposition.conflict_type,
                    severity,
                    format!(
                        "{} tension: '{}' vs '{}'",
                        opposition.label, a.statement, b.statement
                    ),
                    resolution_suggestions(),
                ));
            }
        }
        None
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Canned resolution suggestions attached to every conflict.
fn resolution_suggestions() -> Vec<String> {
    vec![
        "Gather more evidence before trusting either claim".to_string(),
        "Consider whether both hold in different contexts".to_string(),
        "Scope each hypothesis to the domain it was observed in".to_string(),
    ]
}

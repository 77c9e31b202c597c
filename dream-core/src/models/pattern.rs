use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;

/// The four regularity families the detector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Temporal,
    Emotional,
    Communication,
    Decision,
}

impl PatternType {
    pub const ALL: [PatternType; 4] = [
        PatternType::Temporal,
        PatternType::Emotional,
        PatternType::Communication,
        PatternType::Decision,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternType::Temporal => "temporal",
            PatternType::Emotional => "emotional",
            PatternType::Communication => "communication",
            PatternType::Decision => "decision",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An observed regularity in one cycle's interaction batch.
///
/// Patterns are per-cycle working data: only the hypotheses derived from
/// them persist beyond the cycle that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub pattern_type: PatternType,
    /// Human-readable description of the regularity.
    pub description: String,
    pub confidence: Confidence,
    /// How many records contributed to the signal.
    pub frequency: u32,
    /// Time window label (e.g. "morning", "daily").
    pub window: String,
    /// Supporting interaction record ids.
    pub evidence: Vec<String>,
}

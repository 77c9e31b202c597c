use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// Which opposition family a conflict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    Preference,
    Temporal,
    DecisionStyle,
    General,
}

/// A detected tension between two active hypotheses.
///
/// Conflicts are recomputed every cycle and surfaced in the morning
/// report; they are not durable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// UUID v4 identifier for this detection.
    pub id: String,
    pub hypothesis_a: String,
    pub hypothesis_b: String,
    pub conflict_type: ConflictType,
    /// Average of the two hypotheses' confidences.
    pub severity: Confidence,
    pub description: String,
    /// Canned resolution suggestions for the operator.
    pub suggestions: Vec<String>,
    pub detected_at: DateTime<Utc>,
}

impl Conflict {
    pub fn new(
        hypothesis_a: impl Into<String>,
        hypothesis_b: impl Into<String>,
        conflict_type: ConflictType,
        severity: Confidence,
        description: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            hypothesis_a: hypothesis_a.into(),
            hypothesis_b: hypothesis_b.into(),
            conflict_type,
            severity,
            description: description.into(),
            suggestions,
            detected_at: Utc::now(),
        }
    }

    /// True if this conflict involves the given hypothesis id.
    pub fn involves(&self, hypothesis_id: &str) -> bool {
        self.hypothesis_a == hypothesis_id || self.hypothesis_b == hypothesis_id
    }
}

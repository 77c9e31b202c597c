use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;
use crate::constants::MAX_EVIDENCE_PER_HYPOTHESIS;

/// Which facet of the user a hypothesis describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisCategory {
    Behavioral,
    Emotional,
    Cognitive,
}

impl HypothesisCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            HypothesisCategory::Behavioral => "behavioral",
            HypothesisCategory::Emotional => "emotional",
            HypothesisCategory::Cognitive => "cognitive",
        }
    }
}

impl fmt::Display for HypothesisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a hypothesis.
///
/// `Validated`, `Contradicted`, and `Archived` are terminal: they may
/// still receive evidence but are never deleted, and they only re-enter
/// circulation through an explicit new hypothesis creation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisStatus {
    Active,
    Validated,
    Contradicted,
    Archived,
}

/// A durable, confidence-scored claim about the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Stable id, derived from the statement text so identical statements
    /// for the same user collide. See [`Hypothesis::statement_id`].
    pub id: String,
    pub user_id: String,
    pub statement: String,
    pub category: HypothesisCategory,
    pub confidence: Confidence,
    /// Supporting interaction ids, bounded at
    /// [`MAX_EVIDENCE_PER_HYPOTHESIS`] (oldest dropped first).
    pub evidence: Vec<String>,
    pub validation_count: u32,
    pub contradiction_count: u32,
    pub status: HypothesisStatus,
    pub first_observed: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Hypothesis {
    /// Deterministic id: blake3 over the user id and the normalized
    /// (trimmed, lower-cased) statement text.
    pub fn statement_id(user_id: &str, statement: &str) -> String {
        let normalized = format!("{}\n{}", user_id, statement.trim().to_lowercase());
        blake3::hash(normalized.as_bytes()).to_hex().to_string()
    }

    /// Create a fresh active hypothesis from a statement.
    pub fn new(
        user_id: impl Into<String>,
        statement: impl Into<String>,
        category: HypothesisCategory,
        confidence: Confidence,
    ) -> Self {
        let user_id = user_id.into();
        let statement = statement.into();
        let now = Utc::now();
        Self {
            id: Self::statement_id(&user_id, &statement),
            user_id,
            statement,
            category,
            confidence,
            evidence: Vec::new(),
            validation_count: 0,
            contradiction_count: 0,
            status: HypothesisStatus::Active,
            first_observed: now,
            last_updated: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == HypothesisStatus::Active
    }

    /// Append an evidence id, dropping the oldest entry once the bound is
    /// reached.
    pub fn push_evidence(&mut self, interaction_id: impl Into<String>) {
        if self.evidence.len() >= MAX_EVIDENCE_PER_HYPOTHESIS {
            self.evidence.remove(0);
        }
        self.evidence.push(interaction_id.into());
    }
}

/// Identity equality: a hypothesis is its statement-derived id.
impl PartialEq for Hypothesis {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

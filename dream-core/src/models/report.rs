use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::conflict::Conflict;
use super::heritage::GrowthMilestone;
use super::hypothesis::Hypothesis;
use super::pattern::Pattern;

/// What the DNA evolver did this cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionSummary {
    /// Whether the trait hash changed (an "evolution event").
    pub evolved: bool,
    /// Number of trait observations applied.
    pub traits_updated: usize,
    /// The milestone appended this cycle, if any.
    pub milestone: Option<GrowthMilestone>,
    /// Wisdom insights minted this cycle.
    pub new_wisdom: Vec<String>,
}

/// Processing metrics for one cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleMetrics {
    pub records_in: usize,
    pub patterns_detected: usize,
    pub hypotheses_created: usize,
    pub hypotheses_updated: usize,
    pub conflicts_found: usize,
    pub elapsed_ms: u64,
}

/// The daily synthesized digest of a cycle's findings.
///
/// One immutable artifact per user per day; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorningReport {
    pub user_id: String,
    pub date: NaiveDate,
    /// Hypotheses created or updated this cycle.
    pub hypotheses: Vec<Hypothesis>,
    pub patterns: Vec<Pattern>,
    pub conflicts: Vec<Conflict>,
    pub evolution: EvolutionSummary,
    /// Statements of the cycle's strongest hypotheses.
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    /// Templated wisdom paragraph.
    pub wisdom: String,
    /// Weighted dream quality score in [0, 1].
    pub quality_score: Confidence,
    pub metrics: CycleMetrics,
    pub generated_at: DateTime<Utc>,
}

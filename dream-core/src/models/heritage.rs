use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::DreamResult;

/// The four trait groups of a user's Heritage DNA.
///
/// Each group carries its own smoothing decay constant: higher decay means
/// slower, more conservative drift under new observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitGroup {
    Personality,
    Emotional,
    Cognitive,
    Relational,
}

impl TraitGroup {
    pub const ALL: [TraitGroup; 4] = [
        TraitGroup::Personality,
        TraitGroup::Emotional,
        TraitGroup::Cognitive,
        TraitGroup::Relational,
    ];

    /// Momentum constant for exponential smoothing.
    pub fn decay(self) -> f64 {
        match self {
            TraitGroup::Personality => 0.90,
            TraitGroup::Emotional => 0.85,
            TraitGroup::Cognitive => 0.80,
            TraitGroup::Relational => 0.75,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraitGroup::Personality => "personality",
            TraitGroup::Emotional => "emotional",
            TraitGroup::Cognitive => "cognitive",
            TraitGroup::Relational => "relational",
        }
    }
}

impl fmt::Display for TraitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded change event in a user's DNA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthMilestone {
    pub timestamp: DateTime<Utc>,
    /// Trait-map hash before this cycle's updates.
    pub before_hash: String,
    /// Trait-map hash after this cycle's updates.
    pub after_hash: String,
    /// Short summary of what triggered the change.
    pub trigger: String,
}

/// The persistent, slowly-evolving per-user trait model.
///
/// Trait maps are `BTreeMap`s so serialization (and therefore the change
/// hash) is order-stable. Mutated only by the DNA evolver, once per cycle
/// per user; never deleted, only appended to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeritageDna {
    pub user_id: String,
    pub personality: BTreeMap<String, f64>,
    pub emotional: BTreeMap<String, f64>,
    pub cognitive: BTreeMap<String, f64>,
    pub relational: BTreeMap<String, f64>,
    /// Accumulated wisdom insight strings.
    pub wisdom: Vec<String>,
    /// Append-only change history.
    pub milestones: Vec<GrowthMilestone>,
    pub updated_at: DateTime<Utc>,
}

impl HeritageDna {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            personality: BTreeMap::new(),
            emotional: BTreeMap::new(),
            cognitive: BTreeMap::new(),
            relational: BTreeMap::new(),
            wisdom: Vec::new(),
            milestones: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn group(&self, group: TraitGroup) -> &BTreeMap<String, f64> {
        match group {
            TraitGroup::Personality => &self.personality,
            TraitGroup::Emotional => &self.emotional,
            TraitGroup::Cognitive => &self.cognitive,
            TraitGroup::Relational => &self.relational,
        }
    }

    pub fn group_mut(&mut self, group: TraitGroup) -> &mut BTreeMap<String, f64> {
        match group {
            TraitGroup::Personality => &mut self.personality,
            TraitGroup::Emotional => &mut self.emotional,
            TraitGroup::Cognitive => &mut self.cognitive,
            TraitGroup::Relational => &mut self.relational,
        }
    }

    /// Total populated traits across all four groups.
    pub fn trait_count(&self) -> usize {
        TraitGroup::ALL.iter().map(|g| self.group(*g).len()).sum()
    }

    /// blake3 hash over the serialized trait maps. Wisdom and milestones
    /// are excluded so only trait movement counts as evolution.
    pub fn trait_hash(&self) -> DreamResult<String> {
        let maps = (
            &self.personality,
            &self.emotional,
            &self.cognitive,
            &self.relational,
        );
        let serialized = serde_json::to_string(&maps).map_err(crate::errors::StorageError::from)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }
}

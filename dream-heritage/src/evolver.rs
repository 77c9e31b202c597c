//! Applies a cycle's trait observations to a user's Heritage DNA.

use chrono::Utc;
use tracing::{debug, info};

use dream_core::config::HeritageConfig;
use dream_core::constants::MAX_TRAITS_PER_GROUP;
use dream_core::errors::DreamResult;
use dream_core::models::{EvolutionSummary, GrowthMilestone, HeritageDna};

use crate::signals::TraitObservation;
use crate::smoothing::smooth;

/// Evolves Heritage DNA by exponential smoothing, one pass per cycle.
pub struct DnaEvolver {
    config: HeritageConfig,
}

impl DnaEvolver {
    pub fn new(config: HeritageConfig) -> Self {
        Self { config }
    }

    /// Fold `observations` into `dna`, appending a growth milestone when
    /// the trait hash moves and minting wisdom insights for traits that
    /// cross the wisdom threshold from below.
    ///
    /// A group at capacity ignores observations for trait names it does
    /// not already hold; existing traits keep updating.
    pub fn evolve(
        &self,
        dna: &mut HeritageDna,
        observations: &[TraitObservation],
        trigger: &str,
    ) -> DreamResult<EvolutionSummary> {
        let before_hash = dna.trait_hash()?;
        let mut summary = EvolutionSummary::default();

        for obs in observations {
            let decay = obs.group.decay();
            let group = dna.group_mut(obs.group);

            let updated = match group.get(&obs.name).copied() {
                Some(old) => {
                    let new = smooth(old, obs.value, decay);
                    group.insert(obs.name.clone(), new);
                    if old < self.config.wisdom_trait_threshold
                        && new >= self.config.wisdom_trait_threshold
                    {
                        summary.new_wisdom.push(wisdom_insight(obs, new));
                    }
                    true
                }
                None if group.len() < MAX_TRAITS_PER_GROUP => {
                    // First observation seeds the trait directly.
                    group.insert(obs.name.clone(), obs.value);
                    if obs.value >= self.config.wisdom_trait_threshold {
                        summary.new_wisdom.push(wisdom_insight(obs, obs.value));
                    }
                    true
                }
                None => {
                    debug!(
                        group = %obs.group,
                        name = %obs.name,
                        "trait group at capacity, observation ignored"
                    );
                    false
                }
            };
            if updated {
                summary.traits_updated += 1;
            }
        }

        let after_hash = dna.trait_hash()?;
        if after_hash != before_hash {
            summary.evolved = true;
            let milestone = GrowthMilestone {
                timestamp: Utc::now(),
                before_hash,
                after_hash,
                trigger: trigger.to_string(),
            };
            summary.milestone = Some(milestone.clone());
            dna.milestones.push(milestone);
            dna.updated_at = Utc::now();
            info!(
                user_id = %dna.user_id,
                traits_updated = summary.traits_updated,
                new_wisdom = summary.new_wisdom.len(),
                "heritage dna evolved"
            );
        }
        dna.wisdom.extend(summary.new_wisdom.iter().cloned());

        Ok(summary)
    }
}

impl Default for DnaEvolver {
    fn default() -> Self {
        Self::new(HeritageConfig::default())
    }
}

fn wisdom_insight(obs: &TraitObservation, value: f64) -> String {
    format!(
        "The {} trait '{}' has become well-established ({:.2})",
        obs.group, obs.name, value
    )
}

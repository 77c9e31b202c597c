//! Dream quality scoring.

use chrono::{Duration, Utc};

use dream_core::constants::{
    MAX_TRAITS_PER_GROUP, MOMENTUM_MILESTONE_CAP, MOMENTUM_WINDOW_DAYS,
};
use dream_core::models::{Confidence, HeritageDna, Hypothesis, TraitGroup};

const COMPLETENESS_WEIGHT: f64 = 0.3;
const CONFIDENCE_WEIGHT: f64 = 0.4;
const MOMENTUM_WEIGHT: f64 = 0.3;

/// Weighted quality score for a cycle.
///
/// Combines DNA completeness (populated traits over the four-group
/// capacity), the mean confidence of this cycle's hypotheses (neutral 0.5
/// when none), and recent growth momentum (milestones in the trailing
/// window, capped).
pub fn quality_score(dna: Option<&HeritageDna>, hypotheses: &[Hypothesis]) -> Confidence {
    let completeness = dna
        .map(|d| d.trait_count() as f64 / (MAX_TRAITS_PER_GROUP * TraitGroup::ALL.len()) as f64)
        .unwrap_or(0.0);

    let mean_confidence = if hypotheses.is_empty() {
        Confidence::NEUTRAL
    } else {
        hypotheses.iter().map(|h| h.confidence.value()).sum::<f64>() / hypotheses.len() as f64
    };

    let momentum = dna.map(recent_momentum).unwrap_or(0.0);

    Confidence::new(
        COMPLETENESS_WEIGHT * completeness
            + CONFIDENCE_WEIGHT * mean_confidence
            + MOMENTUM_WEIGHT * momentum,
    )
}

fn recent_momentum(dna: &HeritageDna) -> f64 {
    let cutoff = Utc::now() - Duration::days(MOMENTUM_WINDOW_DAYS);
    let recent = dna
        .milestones
        .iter()
        .filter(|m| m.timestamp >= cutoff)
        .count() as f64;
    (recent / MOMENTUM_MILESTONE_CAP).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dream_core::models::{GrowthMilestone, HypothesisCategory};

    fn hypothesis(confidence: f64) -> Hypothesis {
        Hypothesis::new(
            "creator",
            "User is most active during morning hours",
            HypothesisCategory::Behavioral,
            Confidence::new(confidence),
        )
    }

    fn milestone() -> GrowthMilestone {
        GrowthMilestone {
            timestamp: Utc::now(),
            before_hash: "a".to_string(),
            after_hash: "b".to_string(),
            trigger: "test".to_string(),
        }
    }

    #[test]
    fn empty_cycle_scores_neutral_confidence_only() {
        // No DNA, no hypotheses: 0.3×0 + 0.4×0.5 + 0.3×0 = 0.2.
        let score = quality_score(None, &[]);
        assert!((score.value() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn full_dna_and_strong_hypotheses_score_high() {
        let mut dna = HeritageDna::new("creator");
        for group in TraitGroup::ALL {
            for i in 0..MAX_TRAITS_PER_GROUP {
                dna.group_mut(group).insert(format!("trait_{i}"), 0.5);
            }
        }
        for _ in 0..5 {
            dna.milestones.push(milestone());
        }
        let hyps = vec![hypothesis(1.0), hypothesis(1.0)];
        let score = quality_score(Some(&dna), &hyps);
        assert!((score.value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn momentum_is_capped() {
        let mut dna = HeritageDna::new("creator");
        for _ in 0..20 {
            dna.milestones.push(milestone());
        }
        // 0.3×0 + 0.4×0.5 + 0.3×1.0 = 0.5.
        let score = quality_score(Some(&dna), &[]);
        assert!((score.value() - 0.5).abs() < 1e-9);
    }
}

//! Derives trait observations from a cycle's patterns and hypotheses.

use dream_core::models::{
    Hypothesis, HypothesisStatus, Pattern, PatternType, TraitGroup,
};

/// One incoming trait-group update, value in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct TraitObservation {
    pub group: TraitGroup,
    pub name: String,
    pub value: f64,
}

impl TraitObservation {
    fn new(group: TraitGroup, name: impl Into<String>, value: f64) -> Self {
        Self {
            group,
            name: name.into(),
            value: value.clamp(0.0, 1.0),
        }
    }
}

/// Map the cycle's validated behavior onto trait observations.
///
/// The mapping is fixed: temporal regularity feeds cognitive routine
/// consistency, emotional tones feed the emotional group, communication
/// styles feed personality, decision tempo feeds cognitive deliberation,
/// and validated hypotheses weakly reinforce relational trust.
pub fn derive_observations(
    patterns: &[Pattern],
    hypotheses: &[Hypothesis],
) -> Vec<TraitObservation> {
    let mut observations = Vec::new();

    for pattern in patterns {
        match pattern.pattern_type {
            PatternType::Temporal => observations.push(TraitObservation::new(
                TraitGroup::Cognitive,
                "routine_consistency",
                pattern.confidence.value(),
            )),
            PatternType::Emotional => {
                // Detector descriptions read "Recurring <tone> emotional tone".
                let tone = pattern
                    .description
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("tone")
                    .to_lowercase();
                observations.push(TraitObservation::new(
                    TraitGroup::Emotional,
                    tone,
                    pattern.confidence.value(),
                ));
            }
            PatternType::Communication => {
                // Detector descriptions read "Communication style leans <style>".
                let style = pattern
                    .description
                    .split_whitespace()
                    .last()
                    .unwrap_or("balanced")
                    .to_lowercase();
                observations.push(TraitObservation::new(
                    TraitGroup::Personality,
                    style,
                    pattern.confidence.value(),
                ));
            }
            PatternType::Decision => {
                let deliberation = if pattern.description.contains("deliberate") {
                    pattern.confidence.value()
                } else {
                    1.0 - pattern.confidence.value()
                };
                observations.push(TraitObservation::new(
                    TraitGroup::Cognitive,
                    "deliberation",
                    deliberation,
                ));
            }
        }
    }

    let validated: Vec<&Hypothesis> = hypotheses
        .iter()
        .filter(|h| h.status == HypothesisStatus::Validated)
        .collect();
    if !validated.is_empty() {
        let mean = validated
            .iter()
            .map(|h| h.confidence.value())
            .sum::<f64>()
            / validated.len() as f64;
        observations.push(TraitObservation::new(TraitGroup::Relational, "trust", mean));
    }

    observations
}

#[cfg(test)]
mod tests {
    use super::*;
    use dream_core::models::{Confidence, HypothesisCategory};

    fn pattern(pattern_type: PatternType, description: &str, confidence: f64) -> Pattern {
        Pattern {
            pattern_type,
            description: description.to_string(),
            confidence: Confidence::new(confidence),
            frequency: 5,
            window: "morning".to_string(),
            evidence: vec![],
        }
    }

    #[test]
    fn temporal_pattern_feeds_routine_consistency() {
        let obs = derive_observations(
            &[pattern(PatternType::Temporal, "Consistently active", 0.8)],
            &[],
        );
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].group, TraitGroup::Cognitive);
        assert_eq!(obs[0].name, "routine_consistency");
        assert_eq!(obs[0].value, 0.8);
    }

    #[test]
    fn emotional_tone_is_extracted_from_the_description() {
        let obs = derive_observations(
            &[pattern(
                PatternType::Emotional,
                "Recurring joy emotional tone",
                0.6,
            )],
            &[],
        );
        assert_eq!(obs[0].group, TraitGroup::Emotional);
        assert_eq!(obs[0].name, "joy");
    }

    #[test]
    fn quick_decisions_lower_deliberation() {
        let obs = derive_observations(
            &[pattern(
                PatternType::Decision,
                "Tends toward quick decisions",
                0.7,
            )],
            &[],
        );
        assert_eq!(obs[0].name, "deliberation");
        assert!((obs[0].value - 0.3).abs() < 1e-9);
    }

    #[test]
    fn validated_hypotheses_reinforce_trust() {
        let mut hyp = Hypothesis::new(
            "creator",
            "User is most active during morning hours",
            HypothesisCategory::Behavioral,
            Confidence::new(0.95),
        );
        hyp.status = HypothesisStatus::Validated;
        let obs = derive_observations(&[], &[hyp]);
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].group, TraitGroup::Relational);
        assert_eq!(obs[0].name, "trust");
    }
}

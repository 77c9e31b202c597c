use proptest::prelude::*;

use dream_core::models::{HeritageDna, TraitGroup};
use dream_heritage::smoothing::smooth;
use dream_heritage::{DnaEvolver, TraitObservation};

proptest! {
    #[test]
    fn smoothing_stays_in_unit_interval(
        old in 0.0f64..=1.0,
        incoming in 0.0f64..=1.0,
        decay in 0.0f64..=1.0,
    ) {
        let result = smooth(old, incoming, decay);
        prop_assert!((0.0..=1.0).contains(&result));
    }

    #[test]
    fn smoothing_lands_between_old_and_incoming(
        old in 0.0f64..=1.0,
        incoming in 0.0f64..=1.0,
        decay in 0.0f64..=1.0,
    ) {
        let result = smooth(old, incoming, decay);
        let (lo, hi) = if old <= incoming { (old, incoming) } else { (incoming, old) };
        prop_assert!(result >= lo - 1e-12 && result <= hi + 1e-12);
    }

    #[test]
    fn any_observation_sequence_keeps_traits_bounded(
        values in prop::collection::vec(0.0f64..=1.0, 1..40),
    ) {
        let evolver = DnaEvolver::default();
        let mut dna = HeritageDna::new("creator");
        for value in values {
            let obs = TraitObservation {
                group: TraitGroup::Emotional,
                name: "joy".to_string(),
                value,
            };
            evolver.evolve(&mut dna, &[obs], "property run").unwrap();
            let current = dna.emotional["joy"];
            prop_assert!((0.0..=1.0).contains(&current));
        }
    }

    #[test]
    fn milestone_count_never_exceeds_cycle_count(
        values in prop::collection::vec(0.0f64..=1.0, 1..20),
    ) {
        let evolver = DnaEvolver::default();
        let mut dna = HeritageDna::new("creator");
        let cycles = values.len();
        for value in values {
            let obs = TraitObservation {
                group: TraitGroup::Cognitive,
                name: "deliberation".to_string(),
                value,
            };
            evolver.evolve(&mut dna, &[obs], "property run").unwrap();
        }
        prop_assert!(dna.milestones.len() <= cycles);
    }
}

use dream_core::Confidence;
use proptest::prelude::*;

proptest! {
    // Any raw input is clamped into the unit interval.
    #[test]
    fn construction_bounded(value in -1000.0f64..1000.0) {
        let c = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    // Arbitrary sequences of adjustments never escape the bounds.
    #[test]
    fn adjustment_sequences_bounded(
        start in 0.0f64..=1.0,
        deltas in proptest::collection::vec(-0.5f64..0.5, 0..64),
    ) {
        let mut c = Confidence::new(start);
        for d in deltas {
            c = if d >= 0.0 { c + d } else { c - (-d) };
            prop_assert!((0.0..=1.0).contains(&c.value()), "escaped bounds: {}", c);
        }
    }
}

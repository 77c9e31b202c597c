//! Exponential smoothing for trait updates.

/// Fold an incoming observation into an existing trait value.
///
/// ```text
/// new = old × decay + incoming × (1 − decay)
/// ```
///
/// With `old`, `incoming`, and `decay` all in [0, 1] the result is a
/// convex combination and stays in range; the clamp guards against
/// out-of-range inputs from a hand-edited lexicon or store.
pub fn smooth(old: f64, incoming: f64, decay: f64) -> f64 {
    (old * decay + incoming * (1.0 - decay)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_moves_conservatively() {
        // old=0.5, incoming=1.0, decay=0.9 → 0.55.
        let result = smooth(0.5, 1.0, 0.9);
        assert!((result - 0.55).abs() < 1e-12);
    }

    #[test]
    fn lower_decay_drifts_faster() {
        let slow = smooth(0.5, 1.0, 0.9);
        let fast = smooth(0.5, 1.0, 0.75);
        assert!(fast > slow);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(smooth(1.5, 2.0, 0.5), 1.0);
        assert_eq!(smooth(-1.0, 0.0, 0.5), 0.0);
    }
}

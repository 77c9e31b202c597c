//! # dream-heritage
//!
//! Maintains the slowly-changing per-user trait model ("Heritage DNA").
//! Each cycle derives trait observations from the detected patterns and
//! hypotheses, folds them in by exponential smoothing with per-group
//! momentum, and records a growth milestone whenever the trait hash moves.

pub mod evolver;
pub mod signals;
pub mod smoothing;

pub use evolver::DnaEvolver;
pub use signals::{derive_observations, TraitObservation};

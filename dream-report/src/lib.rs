//! # dream-report
//!
//! Turns a finished cycle's outputs into the immutable morning report:
//! a weighted dream-quality score, a templated wisdom paragraph, and
//! deterministic recommendations. Synthesis never fails; empty inputs
//! degrade to neutral defaults.

pub mod quality;
pub mod recommendations;
pub mod synthesizer;
pub mod wisdom;

pub use synthesizer::{CycleOutcome, ReportSynthesizer};

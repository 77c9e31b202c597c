//! # dream-hypothesis
//!
//! Converts detected patterns into durable, confidence-scored hypotheses:
//! template extraction keyed by pattern type, token-overlap deduplication
//! against the active set, passive evidence validation against interaction
//! batches, and the lifecycle state machine
//! (active → validated / contradicted / archived).

pub mod manager;
pub mod overlap;
pub mod templates;

pub use manager::{HypothesisManager, IngestStats};

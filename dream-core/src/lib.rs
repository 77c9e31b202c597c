//! # dream-core
//!
//! Foundation crate for the Dream Cycle engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DreamConfig;
pub use errors::{DreamError, DreamResult, StorageError};
pub use models::{
    Confidence, Conflict, ConflictType, GrowthMilestone, HeritageDna, Hypothesis,
    HypothesisCategory, HypothesisStatus, InteractionRecord, MorningReport, Pattern, PatternType,
    TraitGroup,
};
pub use traits::DreamStore;

//! Data model for the dream cycle pipeline.

mod confidence;
mod conflict;
mod heritage;
mod hypothesis;
mod interaction;
mod pattern;
mod report;

pub use confidence::Confidence;
pub use conflict::{Conflict, ConflictType};
pub use heritage::{GrowthMilestone, HeritageDna, TraitGroup};
pub use hypothesis::{Hypothesis, HypothesisCategory, HypothesisStatus};
pub use interaction::InteractionRecord;
pub use pattern::{Pattern, PatternType};
pub use report::{CycleMetrics, EvolutionSummary, MorningReport};

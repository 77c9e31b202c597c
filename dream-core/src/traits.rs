//! Storage contract for the dream cycle engine.
//!
//! The engine treats persistence as load-at-start / save-after-mutation;
//! the storage engine itself is an external concern behind this trait.

use chrono::NaiveDate;

use crate::errors::DreamResult;
use crate::models::{HeritageDna, Hypothesis, MorningReport};

/// Keyed storage for hypotheses, per-user DNA, and dated reports.
///
/// Implementations must be safe to share across the pipeline workers;
/// per-user write serialization is enforced by the engine, not here.
pub trait DreamStore: Send + Sync {
    // --- Hypotheses ---
    fn put_hypothesis(&self, hypothesis: &Hypothesis) -> DreamResult<()>;
    fn get_hypothesis(&self, id: &str) -> DreamResult<Option<Hypothesis>>;
    fn all_hypotheses(&self) -> DreamResult<Vec<Hypothesis>>;
    fn hypotheses_for_user(&self, user_id: &str) -> DreamResult<Vec<Hypothesis>>;

    // --- Heritage DNA ---
    fn get_dna(&self, user_id: &str) -> DreamResult<Option<HeritageDna>>;
    fn put_dna(&self, dna: &HeritageDna) -> DreamResult<()>;

    // --- Reports ---
    /// Persist a report. Reports are immutable: writing a second report
    /// for the same user and date is a [`crate::StorageError`].
    fn put_report(&self, report: &MorningReport) -> DreamResult<()>;
    fn get_report(&self, user_id: &str, date: NaiveDate) -> DreamResult<Option<MorningReport>>;
    fn latest_report(&self, user_id: &str) -> DreamResult<Option<MorningReport>>;
}

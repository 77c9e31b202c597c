//! # dream-patterns
//!
//! Rule-based pattern detection over one user's interaction batch.
//!
//! Four detectors run per cycle: temporal (hour-of-day bucketing),
//! emotional (keyword shares), communication style (indicator density),
//! and decision style (quick vs deliberate classification). All lexical
//! matching is driven by [`Lexicon`] tables so word lists can be swapped
//! and tested independently of control flow.

pub mod communication;
pub mod decision;
pub mod emotional;
pub mod lexicon;
pub mod temporal;

pub use lexicon::Lexicon;

use dream_core::config::DetectorConfig;
use dream_core::models::{InteractionRecord, Pattern};
use tracing::debug;

/// Runs all four detectors over a batch of one user's interactions.
pub struct PatternDetector {
    config: DetectorConfig,
    lexicon: Lexicon,
}

impl PatternDetector {
    pub fn new(config: DetectorConfig, lexicon: Lexicon) -> Self {
        Self { config, lexicon }
    }

    /// Detector with default thresholds and the built-in word lists.
    pub fn with_defaults() -> Self {
        Self::new(DetectorConfig::default(), Lexicon::default())
    }

    /// Scan a batch and emit zero or more patterns.
    ///
    /// Batches below the minimum size yield nothing: a handful of records
    /// is not enough signal for any detector.
    pub fn detect(&self, batch: &[InteractionRecord]) -> Vec<Pattern> {
        if batch.len() < self.config.min_batch_size {
            debug!(
                records = batch.len(),
                min = self.config.min_batch_size,
                "batch below minimum size, skipping detection"
            );
            return Vec::new();
        }

        let mut patterns = Vec::new();
        patterns.extend(temporal::detect(batch, &self.config));
        patterns.extend(emotional::detect(batch, &self.lexicon, &self.config));
        patterns.extend(communication::detect(batch, &self.lexicon, &self.config));
        patterns.extend(decision::detect(batch, &self.lexicon, &self.config));

        debug!(
            records = batch.len(),
            patterns = patterns.len(),
            "detection pass complete"
        );
        patterns
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

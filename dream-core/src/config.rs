//! Engine configuration.
//!
//! Every section is `#[serde(default)]` so a partial TOML file only
//! overrides what it names.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::DreamResult;

/// Pattern detector tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum records before any detector runs.
    pub min_batch_size: usize,
    /// Temporal bucket consistency threshold.
    pub temporal_consistency_threshold: f64,
    /// Normalized share an emotion category must exceed.
    pub emotion_share_threshold: f64,
    /// Indicator density for communication-style patterns.
    pub communication_density_threshold: f64,
    /// Fixed confidence for decision-style patterns.
    pub decision_confidence: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_batch_size: constants::MIN_BATCH_SIZE,
            temporal_consistency_threshold: constants::TEMPORAL_CONSISTENCY_THRESHOLD,
            emotion_share_threshold: constants::EMOTION_SHARE_THRESHOLD,
            communication_density_threshold: constants::COMMUNICATION_DENSITY_THRESHOLD,
            decision_confidence: constants::DECISION_CONFIDENCE,
        }
    }
}

/// Hypothesis lifecycle tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HypothesisConfig {
    /// Token-set overlap ratio treated as a restatement.
    pub dedup_overlap_threshold: f64,
    /// Confidence boost for a restatement.
    pub restatement_boost: f64,
    /// Confidence increment per supporting record.
    pub support_increment: f64,
    /// Confidence decrement per contradicting record.
    pub contradiction_decrement: f64,
    /// Validations required before promotion to validated.
    pub min_validations_for_promotion: u32,
}

impl Default for HypothesisConfig {
    fn default() -> Self {
        Self {
            dedup_overlap_threshold: constants::DEDUP_OVERLAP_THRESHOLD,
            restatement_boost: constants::RESTATEMENT_BOOST,
            support_increment: constants::SUPPORT_INCREMENT,
            contradiction_decrement: constants::CONTRADICTION_DECREMENT,
            min_validations_for_promotion: constants::MIN_VALIDATIONS_FOR_PROMOTION,
        }
    }
}

/// Heritage DNA tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeritageConfig {
    /// A trait crossing this value from below mints a wisdom insight.
    pub wisdom_trait_threshold: f64,
}

impl Default for HeritageConfig {
    fn default() -> Self {
        Self {
            wisdom_trait_threshold: constants::WISDOM_TRAIT_THRESHOLD,
        }
    }
}

/// Scheduler and queue tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Bounded capacity of each inter-stage queue.
    pub queue_capacity: usize,
    /// Queued batches older than this are discarded (seconds).
    pub batch_ttl_secs: u64,
    /// Hour of day (UTC) for the daily report trigger.
    pub report_hour_utc: u32,
    /// Backoff before retrying a failed report synthesis (seconds).
    pub retry_backoff_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: constants::DEFAULT_QUEUE_CAPACITY,
            batch_ttl_secs: constants::DEFAULT_BATCH_TTL_SECS,
            report_hour_utc: constants::DEFAULT_REPORT_HOUR_UTC,
            retry_backoff_secs: constants::DEFAULT_RETRY_BACKOFF_SECS,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DreamConfig {
    pub detector: DetectorConfig,
    pub hypothesis: HypothesisConfig,
    pub heritage: HeritageConfig,
    pub scheduler: SchedulerConfig,
}

impl DreamConfig {
    /// Parse a TOML document; unnamed sections fall back to defaults.
    pub fn from_toml_str(raw: &str) -> DreamResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<std::path::Path>) -> DreamResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

//! Tunable constants for the dream cycle pipeline.
//!
//! These are the built-in defaults; most are overridable through
//! [`crate::config::DreamConfig`].

// --- Pattern detection ---

/// Minimum records a batch must contain before any detector runs.
pub const MIN_BATCH_SIZE: usize = 5;

/// Consistency ratio (distinct active days / records in bucket) a temporal
/// bucket must reach to qualify as a pattern.
pub const TEMPORAL_CONSISTENCY_THRESHOLD: f64 = 0.5;

/// Share of total emotion-keyword matches a category must exceed to emit
/// an emotional pattern.
pub const EMOTION_SHARE_THRESHOLD: f64 = 0.2;

/// Indicator density (matching records / total records) required to emit a
/// communication-style pattern.
pub const COMMUNICATION_DENSITY_THRESHOLD: f64 = 0.25;

/// Fixed confidence for decision-style patterns. The quick/deliberate
/// signal is coarse, so the score is a moderate constant.
pub const DECISION_CONFIDENCE: f64 = 0.7;

// --- Hypothesis lifecycle ---

/// Token-set overlap ratio above which a candidate statement is treated as
/// a restatement of an existing active hypothesis.
pub const DEDUP_OVERLAP_THRESHOLD: f64 = 0.6;

/// Confidence boost applied when a restatement is folded into an existing
/// hypothesis instead of creating a new row.
pub const RESTATEMENT_BOOST: f64 = 0.05;

/// Confidence increment per supporting record in the passive validation pass.
pub const SUPPORT_INCREMENT: f64 = 0.02;

/// Confidence decrement per contradicting record in the passive validation pass.
pub const CONTRADICTION_DECREMENT: f64 = 0.03;

/// Confidence boost for an explicit operator confirmation.
pub const MANUAL_CONFIRM_BOOST: f64 = 0.15;

/// Confidence penalty for an explicit operator rejection.
pub const MANUAL_REJECT_PENALTY: f64 = 0.25;

/// Validations required (on top of the confidence threshold) before an
/// active hypothesis is promoted to validated.
pub const MIN_VALIDATIONS_FOR_PROMOTION: u32 = 3;

/// Evidence identifiers retained per hypothesis.
pub const MAX_EVIDENCE_PER_HYPOTHESIS: usize = 20;

// --- Heritage DNA ---

/// Traits counted per group when computing DNA completeness.
pub const MAX_TRAITS_PER_GROUP: usize = 6;

/// A trait crossing this value from below yields a wisdom insight.
pub const WISDOM_TRAIT_THRESHOLD: f64 = 0.7;

/// Window for the growth-momentum component of the quality score (days).
pub const MOMENTUM_WINDOW_DAYS: i64 = 7;

/// Milestones within the window that saturate growth momentum.
pub const MOMENTUM_MILESTONE_CAP: f64 = 5.0;

// --- Scheduling ---

/// Bounded capacity of each inter-stage queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Queued batches older than this are discarded instead of processed.
pub const DEFAULT_BATCH_TTL_SECS: u64 = 3600;

/// Hour of day (UTC) at which the daily report trigger fires.
pub const DEFAULT_REPORT_HOUR_UTC: u32 = 3;

/// Backoff before retrying a failed report synthesis.
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 3600;

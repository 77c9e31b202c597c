//! Error taxonomy for the dream cycle pipeline.
//!
//! Stage-local failures (malformed records, unmapped pattern types) are
//! absorbed at the item boundary and logged; they never cross a queue
//! hand-off. The variants here exist for the places where a caller can
//! meaningfully react: storage, configuration, and the engine facade.

/// Convenience alias used across the workspace.
pub type DreamResult<T> = Result<T, DreamError>;

/// Storage-layer errors for the load/save contract.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("report for user {user_id} on {date} already exists")]
    ImmutableReport { user_id: String, date: String },
}

/// Top-level error for the dream cycle engine.
#[derive(Debug, thiserror::Error)]
pub enum DreamError {
    #[error("malformed interaction record: {reason}")]
    MalformedRecord { reason: String },

    #[error("no hypothesis template for pattern type '{pattern_type}'")]
    MissingTemplate { pattern_type: String },

    #[error("hypothesis not found: {id}")]
    HypothesisNotFound { id: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("pipeline queue closed at stage '{stage}'")]
    QueueClosed { stage: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

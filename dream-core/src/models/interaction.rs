use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One logged exchange between the user and the conversational engine.
///
/// Immutable once created; produced by an upstream collaborator and
/// consumed exactly once by the pattern detector for a given cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// UUID v4 identifier.
    pub id: String,
    /// The user this interaction belongs to.
    pub user_id: String,
    /// When the exchange happened.
    pub timestamp: DateTime<Utc>,
    /// Free-text content of the exchange.
    pub content: String,
    /// Coarse emotion label supplied upstream (open vocabulary).
    pub emotion: String,
    /// Interaction-type tag (e.g. "chat", "journal", "question").
    pub kind: String,
    /// Opaque collaborator metadata, passed through untouched.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl InteractionRecord {
    /// Build a record stamped with a fresh UUID and the current time.
    pub fn new(
        user_id: impl Into<String>,
        content: impl Into<String>,
        emotion: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            timestamp: Utc::now(),
            content: content.into(),
            emotion: emotion.into(),
            kind: kind.into(),
            metadata: HashMap::new(),
        }
    }

    /// A record is usable when it names a user and carries content.
    pub fn is_well_formed(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.content.trim().is_empty()
    }
}

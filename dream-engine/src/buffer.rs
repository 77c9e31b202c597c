//! Per-user interaction buffering.

use dashmap::DashMap;
use tracing::debug;

use dream_core::errors::{DreamError, DreamResult};
use dream_core::models::InteractionRecord;

/// Accumulates well-formed interaction records per user until a cycle
/// drains them. Lock-striped by user id.
#[derive(Debug, Default)]
pub struct InteractionBuffer {
    records: DashMap<String, Vec<InteractionRecord>>,
}

impl InteractionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning the user's new buffer depth. Malformed
    /// records are rejected here so nothing downstream sees them.
    pub fn push(&self, record: InteractionRecord) -> DreamResult<usize> {
        if !record.is_well_formed() {
            return Err(DreamError::MalformedRecord {
                reason: format!("record {} has empty user_id or content", record.id),
            });
        }
        let mut entry = self.records.entry(record.user_id.clone()).or_default();
        entry.push(record);
        Ok(entry.len())
    }

    /// Take everything buffered for one user.
    pub fn drain(&self, user_id: &str) -> Vec<InteractionRecord> {
        let drained = self
            .records
            .remove(user_id)
            .map(|(_, records)| records)
            .unwrap_or_default();
        if !drained.is_empty() {
            debug!(user_id, records = drained.len(), "buffer drained");
        }
        drained
    }

    pub fn depth(&self, user_id: &str) -> usize {
        self.records.get(user_id).map(|r| r.len()).unwrap_or(0)
    }

    /// Users currently holding buffered records.
    pub fn users(&self) -> Vec<String> {
        self.records.iter().map(|e| e.key().clone()).collect()
    }
}

//! Per-user write serialization.
//!
//! One logical writer per user id: every read-modify-write of a user's
//! hypothesis table or DNA — pipeline worker, manual cycle, or operator
//! validation — runs under that user's mutex.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

/// Shared map of per-user write locks.
pub(crate) type UserLocks = Arc<DashMap<String, Arc<Mutex<()>>>>;

/// Fetch (or create) the lock for one user.
pub(crate) fn user_lock(locks: &UserLocks, user_id: &str) -> Arc<Mutex<()>> {
    locks.entry(user_id.to_string()).or_default().clone()
}

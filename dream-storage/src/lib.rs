//! # dream-storage
//!
//! Two [`DreamStore`](dream_core::DreamStore) backends: a `DashMap`-backed
//! in-memory store for tests and embedded use, and a JSON-file store that
//! persists hypotheses, per-user DNA, and dated reports under a root
//! directory.

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

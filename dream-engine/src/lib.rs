//! # dream-engine
//!
//! The cycle scheduler and public facade. Interaction records accumulate
//! in a per-user buffer; full batches flow through a staged async
//! pipeline (detection → hypothesis maintenance → conflict/DNA fan-out)
//! over bounded queues, and a daily trigger synthesizes one immutable
//! morning report per user. [`DreamEngine`] also exposes a manual
//! `run_cycle` entry point that executes every stage inline.

pub mod buffer;
pub mod cycle;
pub mod engine;
mod locks;
mod pipeline;
pub mod scheduler;
pub mod telemetry;

pub use buffer::InteractionBuffer;
pub use cycle::CycleRunner;
pub use engine::DreamEngine;

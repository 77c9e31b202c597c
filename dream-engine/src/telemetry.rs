//! Tracing setup for embedders and binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `DREAM_LOG` environment variable for filtering and
/// defaults to `info` when it is unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("DREAM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();
}

/// Initialize tracing with a fixed filter string, for tests and embedding.
pub fn init_tracing_with_filter(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .init();
}

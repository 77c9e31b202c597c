//! Daily report trigger.
//!
//! Sleeps until the configured UTC hour, synthesizes one report per user
//! with a pending cycle outcome, and retries failed syntheses after a
//! fixed backoff. The loop never terminates on its own; only shutdown
//! stops it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Timelike, Utc};
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{info, warn};

use dream_core::config::SchedulerConfig;
use dream_core::errors::{DreamError, StorageError};
use dream_core::traits::DreamStore;
use dream_report::{CycleOutcome, ReportSynthesizer};

use crate::cycle::merge_outcome;

/// Time until the next daily trigger at `report_hour_utc`.
pub(crate) fn next_trigger_delay(report_hour_utc: u32) -> Duration {
    let now = Utc::now();
    let today_trigger = now
        .with_hour(report_hour_utc % 24)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    let target = if today_trigger > now {
        today_trigger
    } else {
        today_trigger + ChronoDuration::days(1)
    };
    (target - now).to_std().unwrap_or(Duration::ZERO)
}

pub(crate) async fn report_loop(
    config: SchedulerConfig,
    store: Arc<dyn DreamStore>,
    pending: Arc<DashMap<String, CycleOutcome>>,
    mut shutdown: watch::Receiver<bool>,
) {
    let synthesizer = ReportSynthesizer::new();
    let backoff = Duration::from_secs(config.retry_backoff_secs);

    loop {
        let delay = next_trigger_delay(config.report_hour_utc);
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown.changed() => return,
        }

        // Retry failed syntheses after the backoff until the day's set
        // drains or shutdown arrives.
        while synthesize_pending(&synthesizer, &store, &pending) > 0 {
            tokio::select! {
                _ = tokio::time::sleep(backoff) => {}
                _ = shutdown.changed() => return,
            }
        }
    }
}

/// Synthesize and persist a report for every user with a pending outcome.
/// Returns the number of users whose synthesis must be retried.
pub(crate) fn synthesize_pending(
    synthesizer: &ReportSynthesizer,
    store: &Arc<dyn DreamStore>,
    pending: &DashMap<String, CycleOutcome>,
) -> usize {
    let users: Vec<String> = pending.iter().map(|e| e.key().clone()).collect();
    let date = Utc::now().date_naive();
    let mut failures = 0;

    for user_id in users {
        let Some((_, outcome)) = pending.remove(&user_id) else {
            continue;
        };
        let report = synthesizer.synthesize(&user_id, date, outcome.clone());
        match store.put_report(&report) {
            Ok(()) => {
                info!(user_id = %user_id, %date, "daily report persisted");
            }
            Err(DreamError::Storage(StorageError::ImmutableReport { .. })) => {
                // Already reported today; the outcome folds into tomorrow.
                warn!(user_id = %user_id, %date, "report already exists, outcome carried forward");
                merge_outcome(pending.entry(user_id).or_default().value_mut(), outcome);
            }
            Err(error) => {
                warn!(user_id = %user_id, %error, "report persist failed, will retry after backoff");
                merge_outcome(pending.entry(user_id).or_default().value_mut(), outcome);
                failures += 1;
            }
        }
    }
    failures
}

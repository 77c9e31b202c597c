//! The staged async pipeline.
//!
//! Bounded mpsc queues connect three workers: detection, hypothesis
//! maintenance, and the conflict/DNA fan-out. Producers block when a
//! queue is full; a batch that sits queued past its TTL is discarded with
//! a warning instead of processed. Item-level failures are logged at the
//! stage boundary and the worker moves on.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use dream_core::config::SchedulerConfig;
use dream_core::models::{CycleMetrics, Hypothesis, InteractionRecord, Pattern};
use dream_report::CycleOutcome;

use crate::cycle::{merge_outcome, CycleRunner};
use crate::locks::{self, UserLocks};

/// A drained batch entering the pipeline.
pub(crate) struct BatchJob {
    pub user_id: String,
    pub records: Vec<InteractionRecord>,
    pub enqueued_at: Instant,
}

struct DetectedJob {
    user_id: String,
    records: Vec<InteractionRecord>,
    patterns: Vec<Pattern>,
    enqueued_at: Instant,
    started_at: Instant,
}

struct AnalyzedJob {
    user_id: String,
    patterns: Vec<Pattern>,
    table: Vec<Hypothesis>,
    touched: Vec<Hypothesis>,
    metrics: CycleMetrics,
    enqueued_at: Instant,
    started_at: Instant,
}

/// Running pipeline: the intake sender plus the worker handles.
pub(crate) struct Pipeline {
    pub intake: mpsc::Sender<BatchJob>,
    pub handles: Vec<JoinHandle<()>>,
}

pub(crate) fn spawn(
    config: &SchedulerConfig,
    runner: Arc<CycleRunner>,
    pending: Arc<DashMap<String, CycleOutcome>>,
    user_locks: UserLocks,
) -> Pipeline {
    let ttl = Duration::from_secs(config.batch_ttl_secs);
    let (intake, detect_rx) = mpsc::channel::<BatchJob>(config.queue_capacity);
    let (detected_tx, detected_rx) = mpsc::channel::<DetectedJob>(config.queue_capacity);
    let (analyzed_tx, analyzed_rx) = mpsc::channel::<AnalyzedJob>(config.queue_capacity);

    let handles = vec![
        tokio::spawn(detect_worker(detect_rx, detected_tx, Arc::clone(&runner), ttl)),
        tokio::spawn(hypothesis_worker(
            detected_rx,
            analyzed_tx,
            Arc::clone(&runner),
            Arc::clone(&user_locks),
            ttl,
        )),
        tokio::spawn(fan_out_worker(analyzed_rx, runner, pending, user_locks, ttl)),
    ];

    Pipeline { intake, handles }
}

fn expired(enqueued_at: Instant, ttl: Duration, user_id: &str, stage: &str) -> bool {
    if enqueued_at.elapsed() > ttl {
        warn!(user_id, stage, "stale batch past TTL discarded");
        true
    } else {
        false
    }
}

async fn detect_worker(
    mut rx: mpsc::Receiver<BatchJob>,
    tx: mpsc::Sender<DetectedJob>,
    runner: Arc<CycleRunner>,
    ttl: Duration,
) {
    while let Some(job) = rx.recv().await {
        if expired(job.enqueued_at, ttl, &job.user_id, "detection") {
            continue;
        }
        let started_at = Instant::now();
        let patterns = runner.detect(&job.records);
        debug!(
            user_id = %job.user_id,
            records = job.records.len(),
            patterns = patterns.len(),
            "detection stage complete"
        );
        let detected = DetectedJob {
            user_id: job.user_id,
            records: job.records,
            patterns,
            enqueued_at: job.enqueued_at,
            started_at,
        };
        if tx.send(detected).await.is_err() {
            break;
        }
    }
}

async fn hypothesis_worker(
    mut rx: mpsc::Receiver<DetectedJob>,
    tx: mpsc::Sender<AnalyzedJob>,
    runner: Arc<CycleRunner>,
    user_locks: UserLocks,
    ttl: Duration,
) {
    while let Some(job) = rx.recv().await {
        if expired(job.enqueued_at, ttl, &job.user_id, "hypothesis") {
            continue;
        }
        // The read-modify-write of the user's table shares the engine's
        // per-user lock with run_cycle and validate_hypothesis: one
        // logical writer per user id.
        let lock = locks::user_lock(&user_locks, &job.user_id);
        let update = {
            let _guard = lock.lock().await;
            match runner.update_hypotheses(&job.user_id, &job.records, &job.patterns) {
                Ok(update) => update,
                Err(error) => {
                    warn!(user_id = %job.user_id, %error, "hypothesis stage failed, batch dropped");
                    continue;
                }
            }
        };
        let metrics = CycleMetrics {
            records_in: job.records.len(),
            patterns_detected: job.patterns.len(),
            hypotheses_created: update.stats.created.len(),
            hypotheses_updated: update.stats.updated.len(),
            conflicts_found: 0,
            elapsed_ms: 0,
        };
        let analyzed = AnalyzedJob {
            user_id: job.user_id,
            patterns: job.patterns,
            table: update.table,
            touched: update.touched,
            metrics,
            enqueued_at: job.enqueued_at,
            started_at: job.started_at,
        };
        if tx.send(analyzed).await.is_err() {
            break;
        }
    }
}

async fn fan_out_worker(
    mut rx: mpsc::Receiver<AnalyzedJob>,
    runner: Arc<CycleRunner>,
    pending: Arc<DashMap<String, CycleOutcome>>,
    user_locks: UserLocks,
    ttl: Duration,
) {
    while let Some(mut job) = rx.recv().await {
        if expired(job.enqueued_at, ttl, &job.user_id, "fan-out") {
            continue;
        }
        // DNA read-modify-write runs under the same per-user lock.
        let lock = locks::user_lock(&user_locks, &job.user_id);
        let (conflicts, dna, evolution) = {
            let _guard = lock.lock().await;
            match runner.fan_out(&job.user_id, &job.patterns, &job.table) {
                Ok(result) => result,
                Err(error) => {
                    warn!(user_id = %job.user_id, %error, "fan-out stage failed, batch dropped");
                    continue;
                }
            }
        };
        job.metrics.conflicts_found = conflicts.len();
        job.metrics.elapsed_ms = job.started_at.elapsed().as_millis() as u64;

        let outcome = CycleOutcome {
            patterns: job.patterns,
            hypotheses: job.touched,
            conflicts,
            evolution,
            dna: Some(dna),
            metrics: job.metrics,
        };
        merge_outcome(
            pending.entry(job.user_id.clone()).or_default().value_mut(),
            outcome,
        );
        debug!(user_id = %job.user_id, "fan-out stage complete, outcome pending for report");
    }
}

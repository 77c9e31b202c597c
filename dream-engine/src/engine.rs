//! The engine facade.

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use dream_core::config::DreamConfig;
use dream_core::errors::{DreamError, DreamResult, StorageError};
use dream_core::models::{HeritageDna, Hypothesis, InteractionRecord, MorningReport};
use dream_core::traits::DreamStore;
use dream_report::{CycleOutcome, ReportSynthesizer};

use crate::buffer::InteractionBuffer;
use crate::cycle::{merge_outcome, CycleRunner};
use crate::locks::{self, UserLocks};
use crate::pipeline::{self, BatchJob};
use crate::scheduler;

struct Running {
    intake: mpsc::Sender<BatchJob>,
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

/// Front door of the dream cycle engine.
///
/// Owns the interaction buffer, the per-user write locks, and (once
/// spawned) the staged pipeline plus the daily report trigger. All
/// mutation of a user's hypothesis table and DNA goes through one logical
/// writer per user id.
pub struct DreamEngine {
    config: DreamConfig,
    store: Arc<dyn DreamStore>,
    buffer: InteractionBuffer,
    runner: Arc<CycleRunner>,
    synthesizer: ReportSynthesizer,
    pending: Arc<DashMap<String, CycleOutcome>>,
    /// Per-user write locks, shared with the pipeline workers.
    user_locks: UserLocks,
    running: Mutex<Option<Running>>,
}

impl DreamEngine {
    pub fn new(config: DreamConfig, store: Arc<dyn DreamStore>) -> Self {
        let runner = Arc::new(CycleRunner::new(&config, Arc::clone(&store)));
        Self {
            config,
            store,
            buffer: InteractionBuffer::new(),
            runner,
            synthesizer: ReportSynthesizer::new(),
            pending: Arc::new(DashMap::new()),
            user_locks: Arc::new(DashMap::new()),
            running: Mutex::new(None),
        }
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        locks::user_lock(&self.user_locks, user_id)
    }

    /// Buffer one interaction record. With the pipeline running, a user's
    /// buffer reaching the minimum batch size is drained into the intake
    /// queue; the call blocks while the queue is full.
    pub async fn ingest(&self, record: InteractionRecord) -> DreamResult<()> {
        let user_id = record.user_id.clone();
        let depth = self.buffer.push(record)?;

        if depth < self.config.detector.min_batch_size {
            return Ok(());
        }
        // Clone the sender out and release the guard before sending, so a
        // full intake queue only blocks this caller, not every other
        // user's ingest or spawn/shutdown.
        let intake = {
            let guard = self.running.lock().await;
            match guard.as_ref() {
                Some(running) => running.intake.clone(),
                None => return Ok(()),
            }
        };
        let records = self.buffer.drain(&user_id);
        if records.is_empty() {
            return Ok(());
        }
        let job = BatchJob {
            user_id,
            records,
            enqueued_at: Instant::now(),
        };
        intake
            .send(job)
            .await
            .map_err(|_| DreamError::QueueClosed {
                stage: "intake".to_string(),
            })?;
        Ok(())
    }

    /// Manual/batch entry point: drain the user's buffer, run all stages
    /// now, and synthesize the morning report immediately.
    pub async fn run_cycle(&self, user_id: &str) -> DreamResult<MorningReport> {
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        let records = self.buffer.drain(user_id);
        let fresh = self.runner.run(user_id, records)?;
        merge_outcome(
            self.pending
                .entry(user_id.to_string())
                .or_default()
                .value_mut(),
            fresh,
        );

        let outcome = self
            .pending
            .remove(user_id)
            .map(|(_, o)| o)
            .unwrap_or_default();
        let report = self
            .synthesizer
            .synthesize(user_id, Utc::now().date_naive(), outcome.clone());

        match self.store.put_report(&report) {
            Ok(()) => {}
            Err(DreamError::Storage(StorageError::ImmutableReport { .. })) => {
                warn!(user_id, "report already exists for today, returning unpersisted synthesis");
            }
            Err(error) => {
                warn!(user_id, %error, "report persist failed, outcome carried forward");
                merge_outcome(
                    self.pending
                        .entry(user_id.to_string())
                        .or_default()
                        .value_mut(),
                    outcome,
                );
            }
        }
        Ok(report)
    }

    /// Explicit operator feedback on a hypothesis.
    pub async fn validate_hypothesis(
        &self,
        id: &str,
        is_correct: bool,
    ) -> DreamResult<Hypothesis> {
        let Some(found) = self.store.get_hypothesis(id)? else {
            return Err(DreamError::HypothesisNotFound { id: id.to_string() });
        };

        let lock = self.user_lock(&found.user_id);
        let _guard = lock.lock().await;

        // Re-read under the lock.
        let Some(mut hypothesis) = self.store.get_hypothesis(id)? else {
            return Err(DreamError::HypothesisNotFound { id: id.to_string() });
        };
        self.runner
            .manager()
            .apply_manual_validation(&mut hypothesis, is_correct);
        self.store.put_hypothesis(&hypothesis)?;
        Ok(hypothesis)
    }

    pub fn get_all_hypotheses(&self) -> DreamResult<Vec<Hypothesis>> {
        self.store.all_hypotheses()
    }

    pub fn get_hypothesis(&self, id: &str) -> DreamResult<Option<Hypothesis>> {
        self.store.get_hypothesis(id)
    }

    pub fn get_heritage_dna(&self, user_id: &str) -> DreamResult<Option<HeritageDna>> {
        self.store.get_dna(user_id)
    }

    pub fn get_latest_report(&self, user_id: &str) -> DreamResult<Option<MorningReport>> {
        self.store.latest_report(user_id)
    }

    pub fn get_report(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DreamResult<Option<MorningReport>> {
        self.store.get_report(user_id, date)
    }

    /// Start the staged pipeline and the daily report trigger. A second
    /// call while running is a no-op.
    pub async fn spawn(&self) {
        let mut guard = self.running.lock().await;
        if guard.is_some() {
            return;
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut pipeline = pipeline::spawn(
            &self.config.scheduler,
            Arc::clone(&self.runner),
            Arc::clone(&self.pending),
            Arc::clone(&self.user_locks),
        );
        pipeline.handles.push(tokio::spawn(scheduler::report_loop(
            self.config.scheduler.clone(),
            Arc::clone(&self.store),
            Arc::clone(&self.pending),
            shutdown_rx,
        )));

        info!(
            queue_capacity = self.config.scheduler.queue_capacity,
            report_hour_utc = self.config.scheduler.report_hour_utc,
            "dream cycle pipeline started"
        );
        *guard = Some(Running {
            intake: pipeline.intake,
            shutdown_tx,
            handles: pipeline.handles,
        });
    }

    /// Stop the pipeline: close the intake so in-flight batches drain,
    /// signal the report loop, and wait for the workers.
    pub async fn shutdown(&self) {
        let Some(running) = self.running.lock().await.take() else {
            return;
        };
        drop(running.intake);
        let _ = running.shutdown_tx.send(true);
        for handle in running.handles {
            if let Err(error) = handle.await {
                warn!(%error, "pipeline worker ended abnormally");
            }
        }
        info!("dream cycle pipeline stopped");
    }
}

//! Stage logic for one user's batch: detection, hypothesis maintenance,
//! and the conflict/DNA fan-out. The pipeline runs the stages as separate
//! workers; `run` composes them for the manual entry point.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use dream_conflict::ConflictDetector;
use dream_core::config::DreamConfig;
use dream_core::errors::DreamResult;
use dream_core::models::{
    Conflict, CycleMetrics, EvolutionSummary, HeritageDna, Hypothesis, InteractionRecord, Pattern,
};
use dream_core::traits::DreamStore;
use std::collections::BTreeSet;

use dream_heritage::{derive_observations, DnaEvolver};
use dream_hypothesis::{HypothesisManager, IngestStats};
use dream_patterns::PatternDetector;
use dream_report::CycleOutcome;

/// Output of the hypothesis stage.
pub struct HypothesisUpdate {
    /// The user's full table after the pass; conflict detection and DNA
    /// signal derivation run over all of it.
    pub table: Vec<Hypothesis>,
    pub stats: IngestStats,
    /// Rows created, reinforced, or confidence-adjusted this cycle. Only
    /// this subset flows into the morning report.
    pub touched: Vec<Hypothesis>,
}

/// Runs the analysis stages for one user batch. The caller serializes
/// access per user.
pub struct CycleRunner {
    store: Arc<dyn DreamStore>,
    detector: PatternDetector,
    manager: HypothesisManager,
    conflicts: ConflictDetector,
    evolver: DnaEvolver,
}

impl CycleRunner {
    pub fn new(config: &DreamConfig, store: Arc<dyn DreamStore>) -> Self {
        Self {
            store,
            detector: PatternDetector::new(config.detector.clone(), Default::default()),
            manager: HypothesisManager::new(config.hypothesis.clone()),
            conflicts: ConflictDetector::with_defaults(),
            evolver: DnaEvolver::new(config.heritage.clone()),
        }
    }

    pub fn manager(&self) -> &HypothesisManager {
        &self.manager
    }

    /// Detection stage: pure over the batch.
    pub fn detect(&self, records: &[InteractionRecord]) -> Vec<Pattern> {
        self.detector.detect(records)
    }

    /// Hypothesis stage: fold the patterns into the user's table, run
    /// passive validation against the batch, persist.
    ///
    /// Store reads propagate; store writes are absorbed with a warning so
    /// the next cycle simply re-persists the current state.
    pub fn update_hypotheses(
        &self,
        user_id: &str,
        records: &[InteractionRecord],
        patterns: &[Pattern],
    ) -> DreamResult<HypothesisUpdate> {
        let mut table = self.store.hypotheses_for_user(user_id)?;
        let stats = self.manager.ingest_patterns(user_id, patterns, &mut table);
        let adjusted = self.manager.validate_against(records, &mut table);
        for hypothesis in &table {
            if let Err(error) = self.store.put_hypothesis(hypothesis) {
                warn!(
                    id = %hypothesis.id,
                    %error,
                    "hypothesis persist failed, will retry next cycle"
                );
            }
        }

        let touched_ids: BTreeSet<&str> = stats
            .created
            .iter()
            .chain(stats.updated.iter())
            .chain(adjusted.iter())
            .map(String::as_str)
            .collect();
        let touched = table
            .iter()
            .filter(|h| touched_ids.contains(h.id.as_str()))
            .cloned()
            .collect();

        Ok(HypothesisUpdate {
            table,
            stats,
            touched,
        })
    }

    /// Fan-out stage: conflict detection over the refreshed table and DNA
    /// evolution from the cycle's signals.
    pub fn fan_out(
        &self,
        user_id: &str,
        patterns: &[Pattern],
        table: &[Hypothesis],
    ) -> DreamResult<(Vec<Conflict>, HeritageDna, EvolutionSummary)> {
        let conflicts = self.conflicts.detect(table);

        let mut dna = self
            .store
            .get_dna(user_id)?
            .unwrap_or_else(|| HeritageDna::new(user_id));
        let observations = derive_observations(patterns, table);
        let evolution = self.evolver.evolve(&mut dna, &observations, "dream cycle")?;
        if let Err(error) = self.store.put_dna(&dna) {
            warn!(user_id, %error, "dna persist failed, will retry next cycle");
        }

        Ok((conflicts, dna, evolution))
    }

    /// All stages in sequence, for the manual/batch entry point.
    pub fn run(&self, user_id: &str, records: Vec<InteractionRecord>) -> DreamResult<CycleOutcome> {
        let started = Instant::now();

        let patterns = self.detect(&records);
        let update = self.update_hypotheses(user_id, &records, &patterns)?;
        let (conflicts, dna, evolution) = self.fan_out(user_id, &patterns, &update.table)?;

        let metrics = CycleMetrics {
            records_in: records.len(),
            patterns_detected: patterns.len(),
            hypotheses_created: update.stats.created.len(),
            hypotheses_updated: update.stats.updated.len(),
            conflicts_found: conflicts.len(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        Ok(CycleOutcome {
            patterns,
            hypotheses: update.touched,
            conflicts,
            evolution,
            dna: Some(dna),
            metrics,
        })
    }
}

/// Fold a fresh cycle outcome into the pending state for the next report.
///
/// Patterns accumulate; touched hypotheses union by id with the newest
/// version winning; conflicts and DNA are snapshots, so the newest wins;
/// metrics and evolution summaries sum.
pub fn merge_outcome(pending: &mut CycleOutcome, fresh: CycleOutcome) {
    pending.patterns.extend(fresh.patterns);
    pending
        .hypotheses
        .retain(|h| !fresh.hypotheses.iter().any(|f| f.id == h.id));
    pending.hypotheses.extend(fresh.hypotheses);
    pending.conflicts = fresh.conflicts;
    pending.dna = fresh.dna;

    pending.evolution.evolved |= fresh.evolution.evolved;
    pending.evolution.traits_updated += fresh.evolution.traits_updated;
    pending
        .evolution
        .new_wisdom
        .extend(fresh.evolution.new_wisdom);
    if fresh.evolution.milestone.is_some() {
        pending.evolution.milestone = fresh.evolution.milestone;
    }

    pending.metrics.records_in += fresh.metrics.records_in;
    pending.metrics.patterns_detected += fresh.metrics.patterns_detected;
    pending.metrics.hypotheses_created += fresh.metrics.hypotheses_created;
    pending.metrics.hypotheses_updated += fresh.metrics.hypotheses_updated;
    pending.metrics.conflicts_found = fresh.metrics.conflicts_found;
    pending.metrics.elapsed_ms += fresh.metrics.elapsed_ms;
}

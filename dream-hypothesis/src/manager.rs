//! HypothesisManager: extraction → dedup → validation → lifecycle.

use chrono::Utc;
use tracing::{debug, info, warn};

use dream_core::config::HypothesisConfig;
use dream_core::models::{
    Hypothesis, HypothesisStatus, InteractionRecord, Pattern,
};

use crate::overlap;
use crate::templates;

/// What an ingest pass did to the user's hypothesis table.
#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    /// Ids of hypotheses created this pass.
    pub created: Vec<String>,
    /// Ids of hypotheses reinforced as restatements.
    pub updated: Vec<String>,
    /// Patterns dropped for lack of a template.
    pub dropped: usize,
}

/// Manages one user's hypothesis table for a cycle.
///
/// The manager is stateless between calls; the engine owns the table and
/// serializes access per user.
pub struct HypothesisManager {
    config: HypothesisConfig,
}

impl HypothesisManager {
    pub fn new(config: HypothesisConfig) -> Self {
        Self { config }
    }

    /// Convert a cycle's patterns into new or reinforced hypotheses.
    ///
    /// Candidates whose statement overlaps an existing *active* hypothesis
    /// above the dedup threshold are folded into it: validation count and
    /// confidence rise, no new row appears. A candidate matching a
    /// terminal row's exact statement is dropped — archived hypotheses
    /// only return through a genuinely novel statement.
    pub fn ingest_patterns(
        &self,
        user_id: &str,
        patterns: &[Pattern],
        table: &mut Vec<Hypothesis>,
    ) -> IngestStats {
        let mut stats = IngestStats::default();

        for pattern in patterns {
            let Some((statement, category)) = templates::statement_for(pattern) else {
                warn!(
                    pattern_type = %pattern.pattern_type,
                    "no hypothesis template for pattern type, dropping pattern"
                );
                stats.dropped += 1;
                continue;
            };

            let candidate_id = Hypothesis::statement_id(user_id, &statement);

            // An identical statement that previously went terminal stays
            // terminal: no silent resurrection.
            if let Some(existing) = table.iter().find(|h| h.id == candidate_id) {
                if !existing.is_active() {
                    debug!(
                        id = %existing.id,
                        status = ?existing.status,
                        "statement matches a terminal hypothesis, skipping"
                    );
                    continue;
                }
            }

            let restated = table
                .iter_mut()
                .filter(|h| h.is_active())
                .find(|h| {
                    overlap::statement_overlap(&h.statement, &statement)
                        > self.config.dedup_overlap_threshold
                });

            match restated {
                Some(existing) => {
                    existing.validation_count += 1;
                    existing.confidence = existing.confidence + self.config.restatement_boost;
                    existing.last_updated = Utc::now();
                    for id in &pattern.evidence {
                        existing.push_evidence(id.clone());
                    }
                    debug!(
                        id = %existing.id,
                        validations = existing.validation_count,
                        confidence = %existing.confidence,
                        "restatement folded into existing hypothesis"
                    );
                    self.apply_transition(existing);
                    stats.updated.push(existing.id.clone());
                }
                None => {
                    let mut hypothesis =
                        Hypothesis::new(user_id, statement, category, pattern.confidence);
                    for id in &pattern.evidence {
                        hypothesis.push_evidence(id.clone());
                    }
                    info!(
                        id = %hypothesis.id,
                        category = %hypothesis.category,
                        confidence = %hypothesis.confidence,
                        "new hypothesis created"
                    );
                    stats.created.push(hypothesis.id.clone());
                    table.push(hypothesis);
                }
            }
        }
        stats
    }

    /// Passive validation: scan the batch for supporting and contradicting
    /// evidence against every active hypothesis. Returns the ids whose
    /// confidence was adjusted.
    ///
    /// A record supports a hypothesis when it contains one of its key
    /// tokens without a negation marker, and contradicts it when a
    /// negation marker co-occurs with a key token. Confidence is clamped
    /// after every adjustment by construction.
    pub fn validate_against(
        &self,
        records: &[InteractionRecord],
        table: &mut Vec<Hypothesis>,
    ) -> Vec<String> {
        let mut adjusted = Vec::new();
        for hypothesis in table.iter_mut().filter(|h| h.is_active()) {
            let keys = overlap::key_tokens(&hypothesis.statement);
            if keys.is_empty() {
                continue;
            }

            let mut support = 0u32;
            let mut contradiction = 0u32;
            for record in records {
                let content = record.content.to_lowercase();
                if !keys.iter().any(|k| content.contains(k.as_str())) {
                    continue;
                }
                if overlap::contains_negation(&content) {
                    contradiction += 1;
                } else {
                    support += 1;
                    hypothesis.push_evidence(record.id.clone());
                }
            }

            if support == 0 && contradiction == 0 {
                continue;
            }

            hypothesis.confidence = hypothesis.confidence
                + self.config.support_increment * support as f64;
            hypothesis.confidence = hypothesis.confidence
                - self.config.contradiction_decrement * contradiction as f64;
            hypothesis.contradiction_count += contradiction;
            hypothesis.last_updated = Utc::now();
            adjusted.push(hypothesis.id.clone());

            debug!(
                id = %hypothesis.id,
                support,
                contradiction,
                confidence = %hypothesis.confidence,
                "passive validation adjusted confidence"
            );
            self.apply_transition(hypothesis);
        }
        adjusted
    }

    /// Explicit operator validation, independent of the passive pass.
    pub fn apply_manual_validation(&self, hypothesis: &mut Hypothesis, is_correct: bool) {
        if is_correct {
            hypothesis.confidence =
                hypothesis.confidence + dream_core::constants::MANUAL_CONFIRM_BOOST;
            hypothesis.validation_count += 1;
            self.apply_transition(hypothesis);
        } else {
            hypothesis.status = HypothesisStatus::Contradicted;
            hypothesis.confidence =
                hypothesis.confidence - dream_core::constants::MANUAL_REJECT_PENALTY;
            hypothesis.contradiction_count += 1;
            info!(id = %hypothesis.id, "hypothesis manually contradicted");
        }
        hypothesis.last_updated = Utc::now();
    }

    /// Status transitions driven by confidence thresholds. Only active
    /// hypotheses move; terminal states stay put.
    fn apply_transition(&self, hypothesis: &mut Hypothesis) {
        if !hypothesis.is_active() {
            return;
        }
        if hypothesis.confidence.is_archival() {
            hypothesis.status = HypothesisStatus::Archived;
            info!(
                id = %hypothesis.id,
                confidence = %hypothesis.confidence,
                "hypothesis archived on low confidence"
            );
        } else if hypothesis.confidence.is_validated()
            && hypothesis.validation_count >= self.config.min_validations_for_promotion
        {
            hypothesis.status = HypothesisStatus::Validated;
            info!(
                id = %hypothesis.id,
                validations = hypothesis.validation_count,
                "hypothesis promoted to validated"
            );
        }
    }
}

impl Default for HypothesisManager {
    fn default() -> Self {
        Self::new(HypothesisConfig::default())
    }
}

//! In-memory store backed by `DashMap`.

use chrono::NaiveDate;
use dashmap::DashMap;

use dream_core::errors::{DreamResult, StorageError};
use dream_core::models::{HeritageDna, Hypothesis, MorningReport};
use dream_core::traits::DreamStore;

/// Concurrent in-memory store. Cheap to clone-free share behind an `Arc`;
/// all maps are keyed for lock-striped access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    hypotheses: DashMap<String, Hypothesis>,
    dna: DashMap<String, HeritageDna>,
    reports: DashMap<(String, NaiveDate), MorningReport>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DreamStore for MemoryStore {
    fn put_hypothesis(&self, hypothesis: &Hypothesis) -> DreamResult<()> {
        self.hypotheses
            .insert(hypothesis.id.clone(), hypothesis.clone());
        Ok(())
    }

    fn get_hypothesis(&self, id: &str) -> DreamResult<Option<Hypothesis>> {
        Ok(self.hypotheses.get(id).map(|h| h.clone()))
    }

    fn all_hypotheses(&self) -> DreamResult<Vec<Hypothesis>> {
        Ok(self.hypotheses.iter().map(|h| h.clone()).collect())
    }

    fn hypotheses_for_user(&self, user_id: &str) -> DreamResult<Vec<Hypothesis>> {
        Ok(self
            .hypotheses
            .iter()
            .filter(|h| h.user_id == user_id)
            .map(|h| h.clone())
            .collect())
    }

    fn get_dna(&self, user_id: &str) -> DreamResult<Option<HeritageDna>> {
        Ok(self.dna.get(user_id).map(|d| d.clone()))
    }

    fn put_dna(&self, dna: &HeritageDna) -> DreamResult<()> {
        self.dna.insert(dna.user_id.clone(), dna.clone());
        Ok(())
    }

    fn put_report(&self, report: &MorningReport) -> DreamResult<()> {
        let key = (report.user_id.clone(), report.date);
        if self.reports.contains_key(&key) {
            return Err(StorageError::ImmutableReport {
                user_id: report.user_id.clone(),
                date: report.date.to_string(),
            }
            .into());
        }
        self.reports.insert(key, report.clone());
        Ok(())
    }

    fn get_report(&self, user_id: &str, date: NaiveDate) -> DreamResult<Option<MorningReport>> {
        Ok(self
            .reports
            .get(&(user_id.to_string(), date))
            .map(|r| r.clone()))
    }

    fn latest_report(&self, user_id: &str) -> DreamResult<Option<MorningReport>> {
        Ok(self
            .reports
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .max_by_key(|entry| entry.key().1)
            .map(|entry| entry.value().clone()))
    }
}

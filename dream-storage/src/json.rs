//! JSON-file store.
//!
//! Layout under the root directory:
//!
//! ```text
//! hypotheses.json            all hypotheses, one array
//! dna/<user>.json            one DNA document per user
//! reports/<user>/<date>.json one immutable report per user per day
//! ```
//!
//! Writes go through a temp file in the same directory followed by a
//! rename, so a crash mid-write leaves the previous version intact.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use dream_core::errors::{DreamResult, StorageError};
use dream_core::models::{HeritageDna, Hypothesis, MorningReport};
use dream_core::traits::DreamStore;

pub struct JsonStore {
    root: PathBuf,
    /// Hypothesis table, loaded once at open and kept in sync with disk.
    hypotheses: DashMap<String, Hypothesis>,
}

impl JsonStore {
    /// Open (or initialize) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> DreamResult<Self> {
        let root = root.into();
        create_dir(&root)?;
        create_dir(&root.join("dna"))?;
        create_dir(&root.join("reports"))?;

        let hypotheses = DashMap::new();
        let table = root.join("hypotheses.json");
        if table.exists() {
            let loaded: Vec<Hypothesis> = read_json(&table)?;
            debug!(count = loaded.len(), "loaded hypothesis table");
            for hypothesis in loaded {
                hypotheses.insert(hypothesis.id.clone(), hypothesis);
            }
        }

        Ok(Self { root, hypotheses })
    }

    fn persist_hypotheses(&self) -> DreamResult<()> {
        let mut all: Vec<Hypothesis> = self.hypotheses.iter().map(|h| h.clone()).collect();
        // Stable file content across runs.
        all.sort_by(|a, b| a.id.cmp(&b.id));
        write_json(&self.root.join("hypotheses.json"), &all)
    }

    fn dna_path(&self, user_id: &str) -> PathBuf {
        self.root.join("dna").join(format!("{user_id}.json"))
    }

    fn report_path(&self, user_id: &str, date: NaiveDate) -> PathBuf {
        self.root
            .join("reports")
            .join(user_id)
            .join(format!("{date}.json"))
    }
}

impl DreamStore for JsonStore {
    fn put_hypothesis(&self, hypothesis: &Hypothesis) -> DreamResult<()> {
        self.hypotheses
            .insert(hypothesis.id.clone(), hypothesis.clone());
        self.persist_hypotheses()
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
        let path = self.dna_path(user_id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(read_json(&path)?))
    }

    fn put_dna(&self, dna: &HeritageDna) -> DreamResult<()> {
        write_json(&self.dna_path(&dna.user_id), dna)
    }

    fn put_report(&self, report: &MorningReport) -> DreamResult<()> {
        let path = self.report_path(&report.user_id, report.date);
        if path.exists() {
            return Err(StorageError::ImmutableReport {
                user_id: report.user_id.clone(),
                date: report.date.to_string(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        write_json(&path, report)
    }

    fn get_report(&self, user_id: &str, date: NaiveDate) -> DreamResult<Option<MorningReport>> {
        let path = self.report_path(user_id, date);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(read_json(&path)?))
    }

    fn latest_report(&self, user_id: &str) -> DreamResult<Option<MorningReport>> {
        let dir = self.root.join("reports").join(user_id);
        if !dir.exists() {
            return Ok(None);
        }
        let mut latest: Option<NaiveDate> = None;
        for entry in fs::read_dir(&dir).map_err(|e| read_failed(&dir, e))? {
            let entry = entry.map_err(|e| read_failed(&dir, e))?;
            let name = entry.file_name();
            let Some(stem) = Path::new(&name).file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(date) = stem.parse::<NaiveDate>() {
                if latest.map_or(true, |seen| date > seen) {
                    latest = Some(date);
                }
            }
        }
        match latest {
            Some(date) => self.get_report(user_id, date),
            None => Ok(None),
        }
    }
}

fn create_dir(path: &Path) -> DreamResult<()> {
    fs::create_dir_all(path).map_err(|e| write_failed(path, e))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> DreamResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
    Ok(serde_json::from_str(&raw).map_err(StorageError::from)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> DreamResult<()> {
    let raw = serde_json::to_string_pretty(value).map_err(StorageError::from)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, raw).map_err(|e| write_failed(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| write_failed(path, e))?;
    Ok(())
}

fn read_failed(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::ReadFailed {
        path: path.display().to_string(),
        source,
    }
}

fn write_failed(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::WriteFailed {
        path: path.display().to_string(),
        source,
    }
}

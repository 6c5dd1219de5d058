//! Bounded recent-password history.
//!
//! Newest first, deduplicated by password value, capped at
//! [`HISTORY_LIMIT`] entries. Persisted as JSON next to the preferences.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::prefs;

pub const HISTORY_LIMIT: usize = 10;
const HISTORY_FILE: &str = "history.json";

/// One remembered password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

/// The recent-passwords list. Entries are ordered newest first.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Load from the default location; absent or corrupt data yields an
    /// empty history.
    pub fn load() -> Self {
        default_path()
            .and_then(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        self.save_to(&default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }

    /// Prepend freshly accepted passwords, dropping duplicate values and
    /// trimming to the capacity. An existing entry with the same value is
    /// superseded by the newer one.
    pub fn add(&mut self, passwords: &[String]) {
        if passwords.is_empty() {
            return;
        }

        let mut combined: Vec<HistoryEntry> = passwords
            .iter()
            .map(|password| HistoryEntry {
                id: Uuid::new_v4(),
                value: password.clone(),
                created_at: Utc::now(),
            })
            .collect();
        combined.append(&mut self.entries);

        let mut seen = HashSet::new();
        for entry in combined {
            if entry.value.is_empty() || !seen.insert(entry.value.clone()) {
                continue;
            }
            self.entries.push(entry);
            if self.entries.len() >= HISTORY_LIMIT {
                break;
            }
        }
    }

    /// Drop all entries and remove the persisted file.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        let path = default_path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn default_path() -> Result<PathBuf, StoreError> {
    Ok(prefs::config_dir()?.join(HISTORY_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(history: &History) -> Vec<&str> {
        history.entries().iter().map(|e| e.value.as_str()).collect()
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut history = History::default();
        history.add(&["one".into()]);
        history.add(&["two".into()]);
        assert_eq!(values(&history), vec!["two", "one"]);
    }

    #[test]
    fn duplicate_values_are_dropped() {
        let mut history = History::default();
        history.add(&["same".into()]);
        history.add(&["same".into(), "other".into()]);
        assert_eq!(values(&history), vec!["same", "other"]);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut history = History::default();
        for i in 0..15 {
            history.add(&[format!("pw-{i}")]);
        }
        assert_eq!(history.entries().len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0].value, "pw-14");
        assert_eq!(history.entries()[9].value, "pw-5");
    }

    #[test]
    fn empty_values_are_ignored() {
        let mut history = History::default();
        history.add(&[String::new(), "real".into()]);
        assert_eq!(values(&history), vec!["real"]);
    }

    #[test]
    fn history_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = History::default();
        history.add(&["alpha".into(), "beta".into()]);
        history.save_to(&path).unwrap();

        let back = History::load_from(&path).unwrap();
        assert_eq!(values(&back), vec!["alpha", "beta"]);
        assert_eq!(back.entries()[0].id, history.entries()[0].id);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            History::load_from(&path),
            Err(StoreError::Format(_))
        ));
    }
}

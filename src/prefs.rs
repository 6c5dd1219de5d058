//! Preference persistence: a flat JSON record of the generation options.
//!
//! Absent or corrupt data falls back to defaults; reset removes the saved
//! record entirely.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GenerationConfig;
use crate::error::StoreError;

const PREFS_FILE: &str = "prefs.json";

/// Load saved preferences, or defaults when nothing usable is on disk.
pub fn load() -> GenerationConfig {
    default_path()
        .and_then(|p| load_from(&p))
        .unwrap_or_default()
}

/// Persist the configuration as the new preferences.
pub fn save(config: &GenerationConfig) -> Result<(), StoreError> {
    save_to(&default_path()?, config)
}

/// Remove the saved record; a later [`load`] returns defaults.
pub fn reset() -> Result<(), StoreError> {
    let path = default_path()?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

pub fn load_from(path: &Path) -> Result<GenerationConfig, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_to(path: &Path, config: &GenerationConfig) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

/// Directory holding the preference and history files.
pub(crate) fn config_dir() -> Result<PathBuf, StoreError> {
    Ok(dirs::config_dir()
        .ok_or(StoreError::NoConfigDir)?
        .join("passgen"))
}

fn default_path() -> Result<PathBuf, StoreError> {
    Ok(config_dir()?.join(PREFS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let config = GenerationConfig {
            length: 31,
            allow_specials: true,
            restrict_confusing: true,
            count: 2,
            ..Default::default()
        };
        save_to(&path, &config).unwrap();
        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_from(&path), Err(StoreError::Io(_))));
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{length: oops").unwrap();
        assert!(matches!(load_from(&path), Err(StoreError::Format(_))));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        save_to(&path, &GenerationConfig::default()).unwrap();
        assert!(path.exists());
    }
}

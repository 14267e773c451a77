// SPDX-License-Identifier: MPL-2.0
//! `settings.toml`-backed implementation of the preference store.

use crate::application::port::preferences::{PreferenceStore, StoreError};
use crate::config::{self, Config};
use std::path::PathBuf;

/// Persists the language preference in the user's `settings.toml`.
///
/// Writes go through load-modify-save so other preferences in the file (if
/// any are ever added) survive a language change. Reads treat an unreadable
/// or invalid file as an empty store.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    /// Explicit config file path, for tests and portable deployments.
    /// `None` uses the platform config directory.
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by an explicit config file path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn load_config(&self) -> Config {
        match &self.path {
            Some(path) if path.exists() => config::load_from_path(path).unwrap_or_default(),
            Some(_) => Config::default(),
            None => config::load().unwrap_or_default(),
        }
    }

    fn save_config(&self, cfg: &Config) -> crate::error::Result<()> {
        match &self.path {
            Some(path) => config::save_to_path(cfg, path),
            None => config::save(cfg),
        }
    }
}

impl PreferenceStore for ConfigStore {
    fn language(&self) -> Option<String> {
        self.load_config().language
    }

    fn set_language(&mut self, code: &str) -> Result<(), StoreError> {
        let mut cfg = self.load_config();
        cfg.language = Some(code.to_string());
        self.save_config(&cfg)
            .map_err(|err| StoreError::WriteFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_path_reads_as_no_preference() {
        let dir = tempdir().expect("temp dir");
        let store = ConfigStore::with_path(dir.path().join("settings.toml"));
        assert_eq!(store.language(), None);
    }

    #[test]
    fn set_language_round_trips_through_the_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut store = ConfigStore::with_path(path.clone());
        store.set_language("ru").expect("write");

        // A fresh store over the same path sees the value, like a reload.
        let reloaded = ConfigStore::with_path(path);
        assert_eq!(reloaded.language(), Some("ru".to_string()));
    }

    #[test]
    fn set_language_creates_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut store = ConfigStore::with_path(path.clone());
        store.set_language("uz-cyrl").expect("write");
        assert!(path.exists());
    }

    #[test]
    fn invalid_file_reads_as_no_preference() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not = valid = toml").expect("write file");

        let store = ConfigStore::with_path(path);
        assert_eq!(store.language(), None);
    }

    #[test]
    fn set_language_overwrites_previous_value() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut store = ConfigStore::with_path(path);
        store.set_language("en").expect("write");
        store.set_language("uz").expect("write");
        assert_eq!(store.language(), Some("uz".to_string()));
    }
}

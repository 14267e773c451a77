// SPDX-License-Identifier: MPL-2.0
//! Durable storage port for the language preference.
//!
//! The landing page persists exactly one value: the chosen locale code. The
//! port mirrors the single key-value entry the original environment offered,
//! narrowed to that one concern so fakes stay trivial.

use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors that can occur while persisting the language preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The preference could not be written to durable storage.
    WriteFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::WriteFailed(msg) => write!(f, "failed to store preference: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// PreferenceStore
// =============================================================================

/// Durable storage for the chosen display language.
///
/// Reads are failure-tolerant: an unreadable store behaves like an empty one,
/// since startup always has the resolution chain to fall back on. Writes
/// surface their errors so the caller can report them.
pub trait PreferenceStore {
    /// The stored locale code, if any. Unreadable storage yields `None`.
    fn language(&self) -> Option<String>;

    /// Stores a locale code, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] when the value cannot be written.
    fn set_language(&mut self, code: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    language: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn set_language(&mut self, code: &str) -> Result<(), StoreError> {
        self.language = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::default();
        assert_eq!(store.language(), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::default();
        store.set_language("uz-cyrl").expect("write");
        assert_eq!(store.language(), Some("uz-cyrl".to_string()));
    }

    #[test]
    fn memory_store_overwrites_previous_value() {
        let mut store = MemoryStore::default();
        store.set_language("ru").expect("write");
        store.set_language("en").expect("write");
        assert_eq!(store.language(), Some("en".to_string()));
    }

    #[test]
    fn store_error_displays_cause() {
        let err = StoreError::WriteFailed("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}

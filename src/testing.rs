//! Testing utilities for lineup
//!
//! This module provides helper types and functions for writing tests,
//! including a `TestStore` wrapper for temporary sled stores, a small
//! sample catalog and a repository that fails every operation.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{ArtistRecord, Catalog, FEATURED_ARTISTS, HEADLINER};
use crate::store::{SettingsRepository, SledRepository, StoreError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Wrapper for a temporary sled store that cleans up on drop
///
/// The store lives in its own temporary directory, so parallel tests never
/// share state.
pub struct TestStore {
    // Field order matters: the repository must close before the directory
    // is removed.
    repo: SledRepository,
    dir: TempDir,
}

impl TestStore {
    /// Open an empty store in a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory or the store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = SledRepository::open(dir.path().join("store")).expect("Failed to open test store");
        Self { repo, dir }
    }

    #[must_use]
    pub const fn repo(&self) -> &SledRepository {
        &self.repo
    }

    /// Directory the store was opened in
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    /// Close the store and hand back its directory for reopening
    #[must_use]
    pub fn into_dir(self) -> TempDir {
        let Self { repo, dir } = self;
        drop(repo);
        dir
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Three artists covering two categories, two days and an unscheduled set
///
/// Catalog order is deliberately not the default sort order:
/// Tiësto (Headliner, Friday), Justice (Headliner, Thursday),
/// Caribou (Featured Artists, unscheduled).
///
/// # Panics
/// Never; the records are valid.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        ArtistRecord::new("Tiësto", HEADLINER, "Friday"),
        ArtistRecord::new("Justice", HEADLINER, "Thursday"),
        ArtistRecord::new("Caribou", FEATURED_ARTISTS, ""),
    ])
    .expect("sample catalog is valid")
}

/// Write `json` as a catalog file inside `dir`
///
/// # Errors
/// Returns an `io::Error` if the file cannot be written.
pub fn write_catalog(dir: &Path, json: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("lineup.json");
    fs::write(&path, json)?;
    Ok(path)
}

/// Repository whose every operation fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRepository;

impl SettingsRepository for FailingRepository {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("read refused".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("write refused".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("write refused".to_string()))
    }

    fn flush(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("flush refused".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;

    #[test]
    fn test_store_basic() {
        let store = TestStore::new();
        store.repo().set(keys::FILTER_QUERY, "\"goose\"").unwrap();
        assert_eq!(store.repo().count(), 1);
    }

    #[test]
    fn test_store_reopens_with_data() {
        let store = TestStore::new();
        let path = store.path();
        store.repo().set(keys::FILTER_DAY, "\"Friday\"").unwrap();

        let dir = store.into_dir();
        let reopened = SledRepository::open(&path).unwrap();
        assert_eq!(reopened.get(keys::FILTER_DAY).unwrap().as_deref(), Some("\"Friday\""));
        drop(reopened);
        drop(dir);
    }

    #[test]
    fn test_write_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(dir.path(), "[]").unwrap();
        assert!(Catalog::load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_failing_repository() {
        assert!(FailingRepository.get("any").is_err());
        assert!(FailingRepository.set("any", "1").is_err());
        assert!(FailingRepository.flush().is_err());
    }
}

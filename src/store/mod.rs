//! Persisted settings for lineup
//!
//! All session state (selections, filters, sort order, export preferences)
//! lives in a small key-value store. The store is an injected collaborator,
//! modelled by the [`SettingsRepository`] trait, so the rest of the crate can
//! be exercised against an in-memory fake.
//!
//! Implementations:
//! - [`SledRepository`]: on-disk store backed by a sled tree
//! - [`MemoryRepository`]: in-memory store for tests and throwaway sessions
//!
//! # Failure policy
//!
//! Persisted state is a preference cache, not data the user cannot recreate.
//! The helpers here ([`load_or_default`], [`save_logged`], [`clear_all`])
//! never fail past their own boundary: corrupt or missing values degrade to
//! defaults and failed writes are logged. The in-memory state of a session
//! stays correct even when it will not survive a restart.

pub mod disk;
pub mod error;
pub mod keys;
pub mod memory;

pub use disk::SledRepository;
pub use error::StoreError;
pub use memory::MemoryRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Key-value capability the session state is persisted through
///
/// Values are JSON documents encoded as strings.
pub trait SettingsRepository {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Force pending writes to durable storage
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush fails.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Read the JSON document stored under `key`
///
/// Returns `None` when the key is absent or the stored value is not JSON.
/// Failures are logged, never returned.
pub fn load_raw(repo: &dyn SettingsRepository, key: &str) -> Option<serde_json::Value> {
    let raw = match repo.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored setting");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding unparsable stored setting");
            None
        }
    }
}

/// Load and decode the value under `key`, falling back to `default`
///
/// Absent keys, read failures and values that do not decode as `T` all
/// yield `default`.
pub fn load_or_default<T: DeserializeOwned>(
    repo: &dyn SettingsRepository,
    key: &str,
    default: T,
) -> T {
    let Some(value) = load_raw(repo, key) else {
        return default;
    };

    match serde_json::from_value(value) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(key, error = %e, "stored setting has an unexpected shape, using default");
            default
        }
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// Returns whether the write succeeded. A failed write is logged and
/// otherwise ignored.
pub fn save_logged<T: Serialize + ?Sized>(
    repo: &dyn SettingsRepository,
    key: &str,
    value: &T,
) -> bool {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(key, error = %e, "failed to encode setting");
            return false;
        }
    };

    match repo.set(key, &encoded) {
        Ok(()) => {
            debug!(key, "saved setting");
            true
        }
        Err(e) => {
            warn!(key, error = %e, "failed to save setting");
            false
        }
    }
}

/// Remove every application key from the store
///
/// Used by the "reset all" action. Failures are logged per key.
pub fn clear_all(repo: &dyn SettingsRepository) {
    for key in keys::ALL {
        if let Err(e) = repo.remove(key) {
            warn!(key, error = %e, "failed to clear setting");
        }
    }
}

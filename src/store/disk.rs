//! On-disk settings repository backed by sled
//!
//! Settings are kept in a dedicated `settings` tree so the database
//! directory can grow other trees later without key collisions.

use super::{SettingsRepository, StoreError};
use sled::{Db, Tree};
use std::path::Path;

/// Settings repository stored in a sled database directory
pub struct SledRepository {
    db: Db,
    settings: Tree,
}

impl SledRepository {
    /// Opens or creates the store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use lineup::store::SledRepository;
    /// let store = SledRepository::open("lineup_store").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the settings
    /// tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let settings = db.open_tree("settings")?;
        Ok(Self { db, settings })
    }

    /// Number of stored settings
    #[must_use]
    pub fn count(&self) -> usize {
        self.settings.len()
    }

    /// Remove every stored setting, including keys lineup does not own
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if clearing the tree fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.settings.clear()?;
        Ok(())
    }
}

impl SettingsRepository for SledRepository {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.settings.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|_| StoreError::InvalidUtf8(key.to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.settings.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.settings.remove(key.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}

impl Drop for SledRepository {
    fn drop(&mut self) {
        // Best-effort flush; callers needing durability call flush() themselves.
        let _ = self.db.flush();
    }
}

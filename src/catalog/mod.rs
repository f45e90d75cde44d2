//! The artist catalog
//!
//! An immutable, ordered list of [`ArtistRecord`]s supplied at startup,
//! either from a JSON file or from the lineup bundled with the binary.
//!
//! Artist names are the key of the selection store, so the catalog enforces
//! uniqueness at ingestion: the first record with a given name is kept and
//! later records with the same name are dropped and logged. Dropped names
//! are available through [`Catalog::duplicates`].
//!
//! # Examples
//!
//! ```
//! use lineup::catalog::{ArtistRecord, Catalog};
//!
//! let catalog = Catalog::new(vec![
//!     ArtistRecord::new("Justice", "Headliner", "Thursday"),
//!     ArtistRecord::new("Caribou", "Featured Artists", ""),
//! ]).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.contains("Justice"));
//! ```

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{
    ALL, ArtistRecord, CATEGORIES, DAYS, FEATURED_ARTISTS, HEADLINER, SUPPORTING_ARTISTS,
    UNSCHEDULED_LABEL,
};

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

const BUNDLED_LINEUP: &str = include_str!("../../data/lineup.json");

/// Immutable, ordered artist catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<ArtistRecord>,
    duplicates: Vec<String>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::BlankName` if a record has an empty name.
    pub fn new(records: Vec<ArtistRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut artists = Vec::with_capacity(records.len());
        let mut duplicates = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::BlankName(index));
            }
            if seen.contains(&record.name) {
                warn!(artist = %record.name, index, "dropping duplicate artist record");
                duplicates.push(record.name);
                continue;
            }
            seen.insert(record.name.clone());
            artists.push(record);
        }

        debug!(artists = artists.len(), duplicates = duplicates.len(), "catalog built");
        Ok(Self { artists, duplicates })
    }

    /// Parse a catalog from a JSON array of artist records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or a record has no name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ArtistRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The lineup bundled with the binary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled data is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_LINEUP)
    }

    /// All artists, in catalog order
    #[must_use]
    pub fn artists(&self) -> &[ArtistRecord] {
        &self.artists
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtistRecord> {
        self.artists.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Look up an artist by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArtistRecord> {
        self.artists.iter().find(|a| a.name == name)
    }

    /// Look up an artist by name, ignoring case
    #[must_use]
    pub fn find_ignore_case(&self, name: &str) -> Option<&ArtistRecord> {
        self.get(name).or_else(|| {
            let needle = name.to_lowercase();
            self.artists.iter().find(|a| a.name.to_lowercase() == needle)
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names dropped at ingestion because an earlier record used them
    #[must_use]
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Day filter options: `All`, then every scheduled day in catalog order
    #[must_use]
    pub fn available_days(&self) -> Vec<&str> {
        let mut days = vec![ALL];
        for artist in &self.artists {
            if artist.is_scheduled() && !days.contains(&artist.day.as_str()) {
                days.push(&artist.day);
            }
        }
        days
    }

    /// Category filter options: `All`, the billed categories present in the
    /// catalog in billing order, then any other category in catalog order
    #[must_use]
    pub fn available_categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL];
        categories.extend(
            CATEGORIES
                .into_iter()
                .filter(|c| self.artists.iter().any(|a| a.category == *c)),
        );
        for artist in &self.artists {
            if !categories.contains(&artist.category.as_str()) {
                categories.push(&artist.category);
            }
        }
        categories
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ArtistRecord;
    type IntoIter = std::slice::Iter<'a, ArtistRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.artists.iter()
    }
}

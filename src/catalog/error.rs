//! Catalog loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the artist catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Cannot read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a JSON array of artist records
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record has an empty or whitespace-only name
    #[error("Artist record #{0} has no name")]
    BlankName(usize),
}

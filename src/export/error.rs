//! Export errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting artists
#[derive(Debug, Error)]
pub enum ExportError {
    /// Neither a selection nor a non-empty view to export
    #[error("Nothing to export: tag some artists or widen the filters")]
    NothingToExport,

    /// The CSV writer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export could not be written to a file
    #[error("Cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The system clipboard is unavailable or rejected the text
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Exported bytes were not valid UTF-8
    #[error("Invalid UTF-8 in export: {0}")]
    InvalidUtf8(String),
}

impl ExportError {
    /// Whether the error is a notice for the user rather than a failure
    #[must_use]
    pub const fn is_notice(&self) -> bool {
        matches!(self, Self::NothingToExport)
    }
}

//! Destinations for exported text
//!
//! Every sink receives the fully built export string, so a failed export
//! never leaves a partial file or clipboard entry behind.

use super::ExportError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `contents` to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `ExportError::Write` if the file cannot be written.
pub fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(())
}

/// Put `text` on the system clipboard
///
/// # Errors
///
/// Returns `ExportError::Clipboard` if no clipboard is available or it
/// rejects the text.
pub fn copy_to_clipboard(text: &str) -> Result<(), ExportError> {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => {
                debug!(bytes = text.len(), "export copied to clipboard");
                Ok(())
            }
            Err(e) => Err(ExportError::Clipboard(e.to_string())),
        },
        Err(e) => Err(ExportError::Clipboard(format!("unavailable: {e}"))),
    }
}

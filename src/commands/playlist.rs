//! Playlist command

use crate::output::OutputWriter;
use crate::playlist::{DEFAULT_PLAYLIST_NAME, PlaylistError, PlaylistOutcome, PlaylistTask};
use crate::{Result, Session};
use std::time::Duration;

/// Execute the playlist command - create a radio from the export scope
///
/// Blocks until the creation finishes. An empty scope or a disabled music
/// service is reported as a warning.
///
/// # Errors
///
/// Returns `LineupError::PlaylistError` if the worker cannot run.
pub fn execute(
    session: &Session,
    task: &PlaylistTask,
    name: Option<&str>,
    delay: Duration,
    output: &dyn OutputWriter,
) -> Result<()> {
    let name = name.unwrap_or(DEFAULT_PLAYLIST_NAME);
    let request = match session.playlist_request(name) {
        Ok(request) => request.with_delay(delay),
        Err(e) => {
            output.warning(&e.to_string());
            return Ok(());
        }
    };

    output.info(&format!(
        "Creating {} radio \"{}\" from {} artist(s)...",
        request.service, request.name, request.artist_count
    ));

    let handle = match task.start(request) {
        Ok(handle) => handle,
        Err(e @ (PlaylistError::NoArtists | PlaylistError::ServiceDisabled)) => {
            output.warning(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match handle.wait()? {
        PlaylistOutcome::Completed(summary) => output.success(&format!(
            "Created {} radio \"{}\" with {} artist(s)",
            summary.service, summary.name, summary.artist_count
        )),
        PlaylistOutcome::Cancelled => output.warning("Playlist creation cancelled"),
    }
    Ok(())
}

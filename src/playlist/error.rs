//! Playlist task errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistError {
    /// No artists in the export scope
    #[error("Please select at least one artist first")]
    NoArtists,

    /// A playlist is already being created
    #[error("A playlist is already being created")]
    AlreadyRunning,

    /// The music service is set to `none`
    #[error("No music service selected")]
    ServiceDisabled,

    /// The worker thread could not be started
    #[error("Failed to start playlist worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// The worker thread panicked
    #[error("Playlist worker stopped unexpectedly")]
    WorkerPanicked,
}

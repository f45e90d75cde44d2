//! Simulated playlist creation
//!
//! Creating a radio playlist is a timer-backed stand-in for a real service
//! call: the worker waits for the configured delay and reports success.
//! Only one creation may be pending at a time; [`PlaylistTask::start`]
//! rejects a second request until the first one finishes or is cancelled.
//!
//! # Examples
//!
//! ```
//! use lineup::export::MusicService;
//! use lineup::playlist::{PlaylistOutcome, PlaylistRequest, PlaylistTask};
//! use std::time::Duration;
//!
//! let task = PlaylistTask::new();
//! let request = PlaylistRequest::new("Forest Radio", MusicService::Spotify, 12)
//!     .with_delay(Duration::from_millis(10));
//!
//! let handle = task.start(request).unwrap();
//! assert!(matches!(handle.wait().unwrap(), PlaylistOutcome::Completed(_)));
//! ```

pub mod error;

pub use error::PlaylistError;

use crate::export::MusicService;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Playlist name used when the user gives none
pub const DEFAULT_PLAYLIST_NAME: &str = "My Lineup Radio";

/// Simulated time a playlist takes to create
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Parameters of one playlist creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub name: String,
    pub service: MusicService,
    pub artist_count: usize,
    pub delay: Duration,
}

impl PlaylistRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, service: MusicService, artist_count: usize) -> Self {
        Self {
            name: name.into(),
            service,
            artist_count,
            delay: DEFAULT_DELAY,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A created playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub name: String,
    pub service: MusicService,
    pub artist_count: usize,
}

/// How a playlist creation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistOutcome {
    Completed(PlaylistSummary),
    Cancelled,
}

/// Launches playlist creations, at most one at a time
#[derive(Debug, Clone, Default)]
pub struct PlaylistTask {
    in_progress: Arc<AtomicBool>,
}

impl PlaylistTask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a creation is pending
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Start creating a playlist on a worker thread
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::NoArtists` for an empty request,
    /// `PlaylistError::ServiceDisabled` when no service is selected and
    /// `PlaylistError::AlreadyRunning` while another creation is pending.
    pub fn start(&self, request: PlaylistRequest) -> Result<PlaylistHandle, PlaylistError> {
        if request.artist_count == 0 {
            return Err(PlaylistError::NoArtists);
        }
        if !request.service.is_enabled() {
            return Err(PlaylistError::ServiceDisabled);
        }
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PlaylistError::AlreadyRunning);
        }

        let guard = InProgressGuard(Arc::clone(&self.in_progress));
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        info!(
            name = %request.name,
            service = request.service.id(),
            artists = request.artist_count,
            "creating playlist"
        );

        let worker = thread::Builder::new()
            .name("playlist".to_string())
            .spawn(move || {
                let _guard = guard;
                match cancel_rx.recv_timeout(request.delay) {
                    Err(RecvTimeoutError::Timeout) => {
                        debug!(name = %request.name, "playlist created");
                        PlaylistOutcome::Completed(PlaylistSummary {
                            name: request.name,
                            service: request.service,
                            artist_count: request.artist_count,
                        })
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        debug!(name = %request.name, "playlist creation cancelled");
                        PlaylistOutcome::Cancelled
                    }
                }
            })
            .map_err(PlaylistError::Spawn)?;

        Ok(PlaylistHandle { cancel_tx, worker })
    }
}

/// Clears the in-progress flag when the worker ends, even by panicking
struct InProgressGuard(Arc<AtomicBool>);

impl Drop for InProgressGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A pending playlist creation
///
/// Dropping the handle cancels the creation.
#[derive(Debug)]
pub struct PlaylistHandle {
    cancel_tx: Sender<()>,
    worker: JoinHandle<PlaylistOutcome>,
}

impl PlaylistHandle {
    /// Ask the worker to stop; a finished creation is unaffected
    pub fn cancel(&self) {
        // The worker may already be gone
        let _ = self.cancel_tx.send(());
    }

    /// Block until the creation finishes
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::WorkerPanicked` if the worker thread panicked.
    pub fn wait(self) -> Result<PlaylistOutcome, PlaylistError> {
        let Self { cancel_tx, worker } = self;
        let outcome = worker.join().map_err(|_| PlaylistError::WorkerPanicked);
        drop(cancel_tx);
        outcome
    }
}

//! Lineup - A festival lineup explorer
//!
//! This library loads a festival's artist catalog, lets a user filter,
//! sort and tag artists into personal categories, and exports the result
//! as text, CSV or a clipboard name list. All user state is persisted in an
//! embedded key-value store so a session picks up where the last one ended.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod output;
pub mod pipeline;
pub mod playlist;
pub mod selection;
pub mod session;
pub mod store;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use session::Session;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum LineupError {
    /// Settings store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Export error
    #[error("Export error: {0}")]
    ExportError(#[from] export::ExportError),
    /// Playlist error
    #[error("Playlist error: {0}")]
    PlaylistError(#[from] playlist::PlaylistError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// No artist with the given name
    #[error("Unknown artist: {0}")]
    UnknownArtist(String),
    /// A session was built without a required part
    #[error("Cannot build session: {0}")]
    Build(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LineupError>;

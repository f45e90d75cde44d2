//! Export preferences

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which artist fields the text and CSV exports include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSelection {
    pub name: bool,
    pub category: bool,
    pub day: bool,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            name: true,
            category: true,
            day: true,
        }
    }
}

impl ColumnSelection {
    /// Whether at least one column is enabled
    #[must_use]
    pub const fn any(&self) -> bool {
        self.name || self.category || self.day
    }
}

/// Extra CSV columns beyond the chosen artist fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CsvExtras {
    /// Add a `Selection` column holding the tag label
    pub selection: bool,
}

/// Streaming service used for artist links and playlists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MusicService {
    #[default]
    Spotify,
    Youtube,
    /// Links and playlists disabled
    None,
}

impl MusicService {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Spotify => "spotify",
            Self::Youtube => "youtube",
            Self::None => "none",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::Youtube => "YouTube Music",
            Self::None => "no service",
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for MusicService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

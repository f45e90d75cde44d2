//! Artist records and the fixed label sets of the lineup

use serde::{Deserialize, Serialize};

/// Filter value meaning "no restriction" for category and day filters
pub const ALL: &str = "All";

pub const HEADLINER: &str = "Headliner";
pub const FEATURED_ARTISTS: &str = "Featured Artists";
pub const SUPPORTING_ARTISTS: &str = "Supporting Artists";

/// Known categories, in billing order
pub const CATEGORIES: [&str; 3] = [HEADLINER, FEATURED_ARTISTS, SUPPORTING_ARTISTS];

/// Known performance days, in schedule order. The empty string marks an
/// unscheduled set and always comes last.
pub const DAYS: [&str; 6] = ["Thursday", "Friday", "Saturday", "Sunday", "Special", ""];

/// Label shown for an artist without a scheduled day
pub const UNSCHEDULED_LABEL: &str = "TBA";

const SPOTIFY_ARTIST_URL: &str = "https://open.spotify.com/artist/";
const YOUTUBE_CHANNEL_URL: &str = "https://music.youtube.com/channel/";

/// One performing artist
///
/// Records are immutable once the catalog is built. `name` is the unique key
/// used by the selection store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub name: String,
    pub category: String,
    /// Performance day, empty when unscheduled
    #[serde(default)]
    pub day: String,
    /// Opaque Spotify artist id, empty when unknown
    #[serde(default)]
    pub spotify_id: String,
    /// Opaque YouTube Music channel id, empty when unknown
    #[serde(default)]
    pub youtube_id: String,
}

impl ArtistRecord {
    /// Create a record without external ids
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            day: day.into(),
            spotify_id: String::new(),
            youtube_id: String::new(),
        }
    }

    /// Attach external ids
    #[must_use]
    pub fn with_ids(mut self, spotify_id: impl Into<String>, youtube_id: impl Into<String>) -> Self {
        self.spotify_id = spotify_id.into();
        self.youtube_id = youtube_id.into();
        self
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        !self.day.is_empty()
    }

    /// Day for display, `TBA` when unscheduled
    #[must_use]
    pub fn day_label(&self) -> &str {
        if self.is_scheduled() {
            &self.day
        } else {
            UNSCHEDULED_LABEL
        }
    }

    /// Spotify artist page, if the id is known
    #[must_use]
    pub fn spotify_url(&self) -> Option<String> {
        (!self.spotify_id.is_empty()).then(|| format!("{SPOTIFY_ARTIST_URL}{}", self.spotify_id))
    }

    /// YouTube Music channel page, if the id is known
    #[must_use]
    pub fn youtube_url(&self) -> Option<String> {
        (!self.youtube_id.is_empty()).then(|| format!("{YOUTUBE_CHANNEL_URL}{}", self.youtube_id))
    }
}

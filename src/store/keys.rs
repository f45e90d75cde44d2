//! Keys of the persisted settings layout
//!
//! Every value stored under these keys is a JSON document encoded as a
//! string.

/// Artist name → selection tag mapping (or name → bool in the legacy format)
pub const SELECTED_ARTISTS: &str = "selected-artists";
/// Free-text search query
pub const FILTER_QUERY: &str = "filter-query";
/// Category filter, `"All"` when unset
pub const FILTER_CATEGORY: &str = "filter-category";
/// Day filter, `"All"` when unset
pub const FILTER_DAY: &str = "filter-day";
/// Sort column
pub const SORT_KEY: &str = "sort-key";
/// Sort direction
pub const SORT_DIRECTION: &str = "sort-direction";
/// Active selection tab
pub const ACTIVE_TAB: &str = "active-tab";
/// Columns included in text and CSV exports
pub const EXPORT_COLUMNS: &str = "export-columns";
/// Preferred music service for links and playlists
pub const MUSIC_SERVICE: &str = "music-service";

/// All application keys, in the order they are cleared on reset
pub const ALL: [&str; 9] = [
    SELECTED_ARTISTS,
    FILTER_QUERY,
    FILTER_CATEGORY,
    FILTER_DAY,
    SORT_KEY,
    SORT_DIRECTION,
    ACTIVE_TAB,
    EXPORT_COLUMNS,
    MUSIC_SERVICE,
];

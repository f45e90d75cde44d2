//! Artist selections
//!
//! Users tag artists into one of three categories. The resulting
//! [`SelectionMap`] is persisted under the `selected-artists` key.
//!
//! Loading is fail-open: a missing or corrupt value yields an empty map.
//! Older stores hold the legacy boolean format; [`bootstrap`] upgrades it
//! once at startup and writes the upgraded map back immediately.

pub mod migrate;
pub mod types;

pub use migrate::{is_legacy_format, legacy_bool_map_to_tag_map};
pub use types::{ParseTagError, SelectionMap, SelectionTag};

use crate::store::{self, SettingsRepository, keys};
use tracing::info;

/// Load the persisted selections
///
/// Returns an empty map if nothing is stored or the value is unparsable.
/// Legacy entries are converted in memory but not written back.
#[must_use]
pub fn load(repo: &dyn SettingsRepository) -> SelectionMap {
    store::load_raw(repo, keys::SELECTED_ARTISTS)
        .map(|raw| legacy_bool_map_to_tag_map(&raw))
        .unwrap_or_default()
}

/// Persist `selections`; failures are logged and ignored
pub fn save(repo: &dyn SettingsRepository, selections: &SelectionMap) {
    store::save_logged(repo, keys::SELECTED_ARTISTS, selections);
}

/// Load selections at startup, upgrading the legacy format
///
/// Called once by the session. If the stored value contains legacy boolean
/// entries, the migrated map is saved straight away so later loads only see
/// the tag format.
#[must_use]
pub fn bootstrap(repo: &dyn SettingsRepository) -> SelectionMap {
    let Some(raw) = store::load_raw(repo, keys::SELECTED_ARTISTS) else {
        return SelectionMap::new();
    };

    let selections = legacy_bool_map_to_tag_map(&raw);
    if is_legacy_format(&raw) {
        info!(migrated = selections.len(), "upgraded legacy selections");
        save(repo, &selections);
    }
    selections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRepository;
    use crate::testing::FailingRepository;

    #[test]
    fn test_load_missing_is_empty() {
        let repo = MemoryRepository::new();
        assert!(load(&repo).is_empty());
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let repo = MemoryRepository::with_entries([(keys::SELECTED_ARTISTS, "{\"Justice\":")]);
        assert!(load(&repo).is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let repo = MemoryRepository::new();
        let map = SelectionMap::new().set_tag("Justice", SelectionTag::ForestWhisper);
        save(&repo, &map);

        assert_eq!(
            repo.get(keys::SELECTED_ARTISTS).unwrap().as_deref(),
            Some("{\"Justice\":\"forest-whisper\"}")
        );
        assert_eq!(load(&repo), map);
    }

    #[test]
    fn test_bootstrap_writes_back_migrated_map() {
        let repo = MemoryRepository::with_entries([(
            keys::SELECTED_ARTISTS,
            "{\"Justice\":true,\"Caribou\":false}",
        )]);

        let map = bootstrap(&repo);
        assert_eq!(map.get("Justice"), SelectionTag::ElectricMagic);
        assert_eq!(
            repo.get(keys::SELECTED_ARTISTS).unwrap().as_deref(),
            Some("{\"Justice\":\"electric-magic\"}")
        );
    }

    #[test]
    fn test_bootstrap_leaves_current_format_untouched() {
        let stored = "{\"Justice\":\"passing-breeze\"}";
        let repo = MemoryRepository::with_entries([(keys::SELECTED_ARTISTS, stored)]);

        let map = bootstrap(&repo);
        assert_eq!(map.get("Justice"), SelectionTag::PassingBreeze);
        assert_eq!(repo.get(keys::SELECTED_ARTISTS).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn test_failing_store_degrades_to_empty() {
        let repo = FailingRepository;
        assert!(bootstrap(&repo).is_empty());
        save(&repo, &SelectionMap::new().set_tag("A", SelectionTag::PRIMARY));
    }
}

//! The derived-view pipeline
//!
//! Turns the catalog, the view state and the selections into the list the
//! user sees:
//!
//! 1. **filter**: keep artists matching the query, category and day
//!    (catalog order preserved)
//! 2. **sort**: order by the sort key, ties broken by name; descending
//!    reverses the combined order
//! 3. **tab-partition**: keep artists whose tag matches the active tab
//!    (order untouched)
//!
//! Every function is pure and the pipeline keeps no cache: it is recomputed
//! in full whenever one of its inputs changes. The catalog holds at most a
//! few hundred artists, so a full pass per keystroke is cheap.
//!
//! # Examples
//!
//! ```
//! use lineup::catalog::{ArtistRecord, Catalog};
//! use lineup::pipeline::compute_visible_artists;
//! use lineup::selection::SelectionMap;
//! use lineup::view::ViewFilterState;
//!
//! let catalog = Catalog::new(vec![
//!     ArtistRecord::new("Caribou", "Featured Artists", ""),
//!     ArtistRecord::new("Justice", "Headliner", "Thursday"),
//! ]).unwrap();
//!
//! let visible = compute_visible_artists(&catalog, &ViewFilterState::default(), &SelectionMap::new());
//! let names: Vec<_> = visible.iter().map(|a| a.name.as_str()).collect();
//! assert_eq!(names, ["Justice", "Caribou"]);
//! ```

pub mod collate;

pub use collate::{category_rank, compare_by, day_rank, locale_cmp};

use crate::catalog::{ArtistRecord, Catalog};
use crate::selection::SelectionMap;
use crate::view::{ActiveTab, SortDirection, SortKey, ViewFilterState};

/// Whether `artist` passes the query, category and day filters
#[must_use]
pub fn matches_filters(artist: &ArtistRecord, view: &ViewFilterState) -> bool {
    let name_match = view.query.is_empty()
        || artist
            .name
            .to_lowercase()
            .contains(&view.query.to_lowercase());
    let category_match = view.category_filter().is_none_or(|c| artist.category == c);
    let day_match = view.day_filter().is_none_or(|d| artist.day == d);

    name_match && category_match && day_match
}

/// Filter stage: the matching artists, in catalog order
#[must_use]
pub fn filter_artists<'a>(catalog: &'a Catalog, view: &ViewFilterState) -> Vec<&'a ArtistRecord> {
    catalog
        .iter()
        .filter(|artist| matches_filters(artist, view))
        .collect()
}

/// Sort stage, in place
pub fn sort_artists(artists: &mut [&ArtistRecord], key: SortKey, direction: SortDirection) {
    artists.sort_by(|a, b| {
        let ordering = compare_by(key, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Filter and sort, before tab partitioning
///
/// This is the list tab counts and the export fallback are computed over.
#[must_use]
pub fn filtered_and_sorted<'a>(catalog: &'a Catalog, view: &ViewFilterState) -> Vec<&'a ArtistRecord> {
    let mut artists = filter_artists(catalog, view);
    sort_artists(&mut artists, view.sort_key, view.sort_direction);
    artists
}

/// Tab stage: keep artists admitted by `tab`, preserving order
#[must_use]
pub fn partition_by_tab<'a>(
    artists: &[&'a ArtistRecord],
    tab: ActiveTab,
    selections: &SelectionMap,
) -> Vec<&'a ArtistRecord> {
    artists
        .iter()
        .copied()
        .filter(|artist| tab.admits(selections.get(&artist.name)))
        .collect()
}

/// The full pipeline: filter → sort → tab-partition
#[must_use]
pub fn compute_visible_artists<'a>(
    catalog: &'a Catalog,
    view: &ViewFilterState,
    selections: &SelectionMap,
) -> Vec<&'a ArtistRecord> {
    let sorted = filtered_and_sorted(catalog, view);
    partition_by_tab(&sorted, view.active_tab, selections)
}

/// Badge counts for the five fixed tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCounts {
    counts: [usize; ActiveTab::TABS.len()],
}

impl TabCounts {
    /// Count, over the filtered and sorted list, how many artists each tab
    /// would show
    #[must_use]
    pub fn compute(artists: &[&ArtistRecord], selections: &SelectionMap) -> Self {
        let mut counts = [0; ActiveTab::TABS.len()];
        for artist in artists {
            let tag = selections.get(&artist.name);
            for (slot, tab) in counts.iter_mut().zip(ActiveTab::TABS) {
                if tab.admits(tag) {
                    *slot += 1;
                }
            }
        }
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, tab: ActiveTab) -> usize {
        ActiveTab::TABS
            .iter()
            .position(|t| *t == tab)
            .map_or(0, |i| self.counts[i])
    }

    /// `(tab, count)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ActiveTab, usize)> + '_ {
        ActiveTab::TABS.into_iter().zip(self.counts)
    }
}

/// Summary line figures for the lineup view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineupStats {
    /// Artists passing the filters
    pub filtered: usize,
    /// Artists in the catalog
    pub total: usize,
    /// Tagged artists anywhere in the catalog; stored tags for names the
    /// catalog lacks are not counted
    pub selected: usize,
    /// Tagged artists among the filtered ones
    pub selected_filtered: usize,
}

impl LineupStats {
    #[must_use]
    pub fn compute(catalog: &Catalog, filtered: &[&ArtistRecord], selections: &SelectionMap) -> Self {
        Self {
            filtered: filtered.len(),
            total: catalog.len(),
            selected: selections
                .iter()
                .filter(|(name, _)| catalog.contains(name))
                .count(),
            selected_filtered: filtered
                .iter()
                .filter(|a| selections.is_tagged(&a.name))
                .count(),
        }
    }

    /// Share of the filtered artists that are tagged, in percent
    ///
    /// `None` when nothing is tagged or nothing passes the filters.
    #[must_use]
    pub fn selected_percent(&self) -> Option<f64> {
        if self.selected_filtered == 0 || self.filtered == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(self.selected_filtered as f64 / self.filtered as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FEATURED_ARTISTS, HEADLINER, SUPPORTING_ARTISTS};
    use crate::selection::SelectionTag;
    use crate::testing::sample_catalog;

    fn names(artists: &[&ArtistRecord]) -> Vec<String> {
        artists.iter().map(|a| a.name.clone()).collect()
    }

    fn wide_catalog() -> Catalog {
        Catalog::new(vec![
            ArtistRecord::new("Polo & Pan", SUPPORTING_ARTISTS, "Saturday"),
            ArtistRecord::new("Goose", FEATURED_ARTISTS, "Saturday"),
            ArtistRecord::new("Odesza", HEADLINER, "Sunday"),
            ArtistRecord::new("Caribou", FEATURED_ARTISTS, ""),
            ArtistRecord::new("Emancipator", SUPPORTING_ARTISTS, "Special"),
            ArtistRecord::new("Big Wild", FEATURED_ARTISTS, "Thursday"),
            ArtistRecord::new("Local Band", "Local Heroes", "Friday"),
            ArtistRecord::new("Justice", HEADLINER, "Thursday"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_view_scenario() {
        let catalog = sample_catalog();
        let visible = compute_visible_artists(&catalog, &ViewFilterState::default(), &SelectionMap::new());
        assert_eq!(names(&visible), ["Justice", "Tiësto", "Caribou"]);
    }

    #[test]
    fn test_query_scenario_ignores_sort() {
        let catalog = sample_catalog();
        for key in SortKey::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let view = ViewFilterState {
                    query: "jus".into(),
                    sort_key: key,
                    sort_direction: direction,
                    ..ViewFilterState::default()
                };
                let visible = compute_visible_artists(&catalog, &view, &SelectionMap::new());
                assert_eq!(names(&visible), ["Justice"]);
            }
        }
    }

    #[test]
    fn test_tab_scenario() {
        let catalog = sample_catalog();
        let selections = SelectionMap::new().set_tag("Justice", SelectionTag::ElectricMagic);

        let mut view = ViewFilterState {
            active_tab: ActiveTab::Tagged(SelectionTag::ElectricMagic),
            ..ViewFilterState::default()
        };
        assert_eq!(names(&compute_visible_artists(&catalog, &view, &selections)), ["Justice"]);

        view.active_tab = ActiveTab::Untagged;
        assert_eq!(
            names(&compute_visible_artists(&catalog, &view, &selections)),
            ["Tiësto", "Caribou"]
        );
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let view = ViewFilterState {
            query: "TIË".into(),
            ..ViewFilterState::default()
        };
        assert_eq!(names(&filter_artists(&catalog, &view)), ["Tiësto"]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = wide_catalog();
        let view = ViewFilterState {
            query: "o".into(),
            sort_key: SortKey::Name,
            ..ViewFilterState::default()
        };
        let filtered = filter_artists(&catalog, &view);
        let catalog_order: Vec<String> = catalog
            .iter()
            .filter(|a| a.name.to_lowercase().contains('o'))
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names(&filtered), catalog_order);
    }

    #[test]
    fn test_category_and_day_filters() {
        let catalog = wide_catalog();
        let view = ViewFilterState {
            category: FEATURED_ARTISTS.into(),
            day: "Saturday".into(),
            ..ViewFilterState::default()
        };
        assert_eq!(names(&filter_artists(&catalog, &view)), ["Goose"]);
    }

    #[test]
    fn test_category_ranking_is_not_alphabetical() {
        let catalog = Catalog::new(vec![
            ArtistRecord::new("Z", SUPPORTING_ARTISTS, ""),
            ArtistRecord::new("A", HEADLINER, ""),
        ])
        .unwrap();
        let sorted = filtered_and_sorted(&catalog, &ViewFilterState::default());
        assert_eq!(names(&sorted), ["A", "Z"]);
    }

    #[test]
    fn test_category_sort_puts_unknown_last() {
        let catalog = wide_catalog();
        let sorted = filtered_and_sorted(&catalog, &ViewFilterState::default());
        assert_eq!(
            names(&sorted),
            [
                "Justice",
                "Odesza",
                "Big Wild",
                "Caribou",
                "Goose",
                "Emancipator",
                "Polo & Pan",
                "Local Band"
            ]
        );
    }

    #[test]
    fn test_day_sort_puts_unscheduled_after_special() {
        let catalog = wide_catalog();
        let view = ViewFilterState {
            sort_key: SortKey::Day,
            ..ViewFilterState::default()
        };
        let sorted = filtered_and_sorted(&catalog, &view);
        assert_eq!(
            names(&sorted),
            [
                "Big Wild",
                "Justice",
                "Local Band",
                "Goose",
                "Polo & Pan",
                "Odesza",
                "Emancipator",
                "Caribou"
            ]
        );
    }

    #[test]
    fn test_descending_reverses_combined_order() {
        let catalog = wide_catalog();
        for key in SortKey::ALL {
            let asc = ViewFilterState {
                sort_key: key,
                ..ViewFilterState::default()
            };
            let desc = ViewFilterState {
                sort_direction: SortDirection::Desc,
                ..asc.clone()
            };
            let mut expected = filtered_and_sorted(&catalog, &asc);
            expected.reverse();
            assert_eq!(filtered_and_sorted(&catalog, &desc), expected, "{key}");
        }
    }

    #[test]
    fn test_sort_is_deterministic() {
        let catalog = wide_catalog();
        for key in SortKey::ALL {
            let view = ViewFilterState {
                sort_key: key,
                ..ViewFilterState::default()
            };
            let once = filtered_and_sorted(&catalog, &view);
            let mut twice = once.clone();
            sort_artists(&mut twice, key, SortDirection::Asc);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_tabs_partition_the_filtered_list() {
        let catalog = wide_catalog();
        let selections = SelectionMap::new()
            .set_tag("Goose", SelectionTag::ElectricMagic)
            .set_tag("Odesza", SelectionTag::ForestWhisper)
            .set_tag("Caribou", SelectionTag::PassingBreeze)
            .set_tag("Justice", SelectionTag::PassingBreeze);
        let view = ViewFilterState::default();
        let all = filtered_and_sorted(&catalog, &view);

        let mut union: Vec<&ArtistRecord> = Vec::new();
        for tab in &ActiveTab::TABS[1..] {
            let part = partition_by_tab(&all, *tab, &selections);
            for artist in &part {
                assert!(!union.contains(artist), "{} appears on two tabs", artist.name);
            }
            union.extend(part);
        }
        assert_eq!(union.len(), all.len());
        assert_eq!(partition_by_tab(&all, ActiveTab::All, &selections), all);
    }

    #[test]
    fn test_tab_counts() {
        let catalog = wide_catalog();
        let selections = SelectionMap::new()
            .set_tag("Goose", SelectionTag::ElectricMagic)
            .set_tag("Caribou", SelectionTag::PassingBreeze)
            .set_tag("Justice", SelectionTag::PassingBreeze);
        let view = ViewFilterState {
            category: FEATURED_ARTISTS.into(),
            active_tab: ActiveTab::Tagged(SelectionTag::ForestWhisper),
            ..ViewFilterState::default()
        };
        let filtered = filtered_and_sorted(&catalog, &view);
        let counts = TabCounts::compute(&filtered, &selections);

        assert_eq!(counts.get(ActiveTab::All), 3);
        assert_eq!(counts.get(ActiveTab::Untagged), 1);
        assert_eq!(counts.get(ActiveTab::Tagged(SelectionTag::ElectricMagic)), 1);
        assert_eq!(counts.get(ActiveTab::Tagged(SelectionTag::ForestWhisper)), 0);
        assert_eq!(counts.get(ActiveTab::Tagged(SelectionTag::PassingBreeze)), 1);
        assert_eq!(counts.iter().count(), 5);
    }

    #[test]
    fn test_stats() {
        let catalog = sample_catalog();
        let selections = SelectionMap::new()
            .set_tag("Justice", SelectionTag::ElectricMagic)
            .set_tag("Caribou", SelectionTag::ForestWhisper);
        let view = ViewFilterState {
            category: HEADLINER.into(),
            ..ViewFilterState::default()
        };
        let filtered = filtered_and_sorted(&catalog, &view);
        let stats = LineupStats::compute(&catalog, &filtered, &selections);

        assert_eq!(stats.filtered, 2);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.selected, 2);
        assert_eq!(stats.selected_filtered, 1);
        assert_eq!(stats.selected_percent(), Some(50.0));
    }

    #[test]
    fn test_stats_ignore_tags_outside_catalog() {
        let catalog = sample_catalog();
        let selections = SelectionMap::new()
            .set_tag("Justice", SelectionTag::ElectricMagic)
            .set_tag("Daft Punk", SelectionTag::PassingBreeze);
        let filtered = filtered_and_sorted(&catalog, &ViewFilterState::default());
        let stats = LineupStats::compute(&catalog, &filtered, &selections);

        assert_eq!(stats.selected, 1);
        assert_eq!(stats.selected_filtered, 1);
    }

    #[test]
    fn test_stats_percent_absent_without_selection() {
        let catalog = sample_catalog();
        let filtered = filtered_and_sorted(&catalog, &ViewFilterState::default());
        let stats = LineupStats::compute(&catalog, &filtered, &SelectionMap::new());
        assert_eq!(stats.selected_percent(), None);
    }
}

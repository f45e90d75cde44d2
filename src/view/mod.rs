//! Filter, sort and tab state of the lineup view
//!
//! [`ViewFilterState`] holds the parameters of the derived-view pipeline.
//! Each field is persisted under its own key and restored independently,
//! so one corrupt value only resets that field. Unrecognized persisted
//! enum values (sort key, direction, tab) fall back to their defaults.

pub mod types;

pub use types::{ActiveTab, SortDirection, SortKey};

use crate::catalog::ALL;
use crate::store::{self, SettingsRepository, keys};
use tracing::warn;

/// A persisted group of view fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewField {
    Query,
    Category,
    Day,
    /// Sort key and direction, always written together
    Sort,
    ActiveTab,
}

/// Current filter predicate, sort order and active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilterState {
    /// Case-insensitive substring matched against artist names
    pub query: String,
    /// Category label or `"All"`
    pub category: String,
    /// Day label or `"All"`
    pub day: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub active_tab: ActiveTab,
}

impl Default for ViewFilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL.to_string(),
            day: ALL.to_string(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            active_tab: ActiveTab::default(),
        }
    }
}

impl ViewFilterState {
    /// Sort by `key`: the current column flips direction, another column
    /// becomes the sort key in ascending order
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Category filter, `None` when all categories are shown
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        (self.category != ALL).then_some(self.category.as_str())
    }

    /// Day filter, `None` when all days are shown
    #[must_use]
    pub fn day_filter(&self) -> Option<&str> {
        (self.day != ALL).then_some(self.day.as_str())
    }

    /// Whether any filter narrows the catalog
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || self.category_filter().is_some() || self.day_filter().is_some()
    }

    /// Restore the state from the repository, field by field
    #[must_use]
    pub fn load(repo: &dyn SettingsRepository) -> Self {
        let defaults = Self::default();

        let sort_key = load_enum(repo, keys::SORT_KEY, SortKey::parse, defaults.sort_key);
        let sort_direction = load_enum(
            repo,
            keys::SORT_DIRECTION,
            SortDirection::parse,
            defaults.sort_direction,
        );
        let active_tab = load_enum(repo, keys::ACTIVE_TAB, ActiveTab::parse, defaults.active_tab);

        Self {
            query: store::load_or_default(repo, keys::FILTER_QUERY, defaults.query),
            category: store::load_or_default(repo, keys::FILTER_CATEGORY, defaults.category),
            day: store::load_or_default(repo, keys::FILTER_DAY, defaults.day),
            sort_key,
            sort_direction,
            active_tab,
        }
    }

    /// Persist one field; failures are logged and ignored
    pub fn save_field(&self, repo: &dyn SettingsRepository, field: ViewField) {
        match field {
            ViewField::Query => {
                store::save_logged(repo, keys::FILTER_QUERY, &self.query);
            }
            ViewField::Category => {
                store::save_logged(repo, keys::FILTER_CATEGORY, &self.category);
            }
            ViewField::Day => {
                store::save_logged(repo, keys::FILTER_DAY, &self.day);
            }
            ViewField::Sort => {
                store::save_logged(repo, keys::SORT_KEY, self.sort_key.id());
                store::save_logged(repo, keys::SORT_DIRECTION, self.sort_direction.id());
            }
            ViewField::ActiveTab => {
                store::save_logged(repo, keys::ACTIVE_TAB, self.active_tab.id());
            }
        }
    }

    /// Persist every field
    pub fn save(&self, repo: &dyn SettingsRepository) {
        for field in [
            ViewField::Query,
            ViewField::Category,
            ViewField::Day,
            ViewField::Sort,
            ViewField::ActiveTab,
        ] {
            self.save_field(repo, field);
        }
    }
}

fn load_enum<T: Copy>(
    repo: &dyn SettingsRepository,
    key: &str,
    parse: fn(&str) -> Option<T>,
    default: T,
) -> T {
    let Some(raw) = store::load_or_default::<Option<String>>(repo, key, None) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        warn!(key, value = %raw, "unrecognized stored value, using default");
        default
    })
}

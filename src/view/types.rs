//! Sort and tab enumerations of the view state

use crate::selection::SelectionTag;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column the visible list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[default]
    Category,
    Day,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Category, Self::Day];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Day => "day",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == input)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the sorted column
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Tab narrowing the visible list by selection tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    /// Every artist
    #[default]
    All,
    /// Artists without a tag
    Untagged,
    /// Artists carrying exactly this tag
    Tagged(SelectionTag),
}

impl ActiveTab {
    /// The five fixed tabs, in display order
    pub const TABS: [Self; 5] = [
        Self::All,
        Self::Untagged,
        Self::Tagged(SelectionTag::ElectricMagic),
        Self::Tagged(SelectionTag::ForestWhisper),
        Self::Tagged(SelectionTag::PassingBreeze),
    ];

    /// Persisted id: `all`, `none`, or the tag id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Untagged => "none",
            Self::Tagged(tag) => tag.id(),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Untagged => SelectionTag::Unset.label(),
            Self::Tagged(tag) => tag.label(),
        }
    }

    /// Parse a tab id or label
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        SelectionTag::parse(input).map(Self::for_tag)
    }

    /// Tab showing artists with `tag`; `Unset` maps to the untagged tab
    #[must_use]
    pub const fn for_tag(tag: SelectionTag) -> Self {
        if tag.is_set() {
            Self::Tagged(tag)
        } else {
            Self::Untagged
        }
    }

    /// Whether an artist carrying `tag` belongs on this tab
    #[must_use]
    pub fn admits(self, tag: SelectionTag) -> bool {
        match self {
            Self::All => true,
            Self::Untagged => !tag.is_set(),
            Self::Tagged(wanted) => tag == wanted,
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_ids_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.id()), Some(key));
        }
        assert_eq!(SortKey::parse("popularity"), None);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(ActiveTab::parse("all"), Some(ActiveTab::All));
        assert_eq!(ActiveTab::parse("none"), Some(ActiveTab::Untagged));
        assert_eq!(
            ActiveTab::parse("Forest Whisper"),
            Some(ActiveTab::Tagged(SelectionTag::ForestWhisper))
        );
        assert_eq!(ActiveTab::parse("backstage"), None);
    }

    #[test]
    fn test_each_tag_admitted_by_exactly_one_narrow_tab() {
        let tags = [
            SelectionTag::Unset,
            SelectionTag::ElectricMagic,
            SelectionTag::ForestWhisper,
            SelectionTag::PassingBreeze,
        ];
        for tag in tags {
            let admitting = ActiveTab::TABS[1..].iter().filter(|t| t.admits(tag)).count();
            assert_eq!(admitting, 1, "{tag:?}");
            assert!(ActiveTab::All.admits(tag));
        }
    }
}

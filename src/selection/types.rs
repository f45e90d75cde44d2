//! Selection tags and the artist → tag mapping

use crate::catalog::ArtistRecord;
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A user-assigned selection category
///
/// `Unset` means "no tag"; it is never stored in a [`SelectionMap`].
/// Persisted form is the kebab-case id (`electric-magic`, ...); the
/// human-readable label is only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionTag {
    #[default]
    #[serde(rename = "none")]
    Unset,
    ElectricMagic,
    ForestWhisper,
    PassingBreeze,
}

impl SelectionTag {
    /// The tags a user can assign, in display order
    pub const CONCRETE: [Self; 3] = [Self::ElectricMagic, Self::ForestWhisper, Self::PassingBreeze];

    /// Tag given to artists that were "selected" in the legacy boolean format
    /// and by the select-all action
    pub const PRIMARY: Self = Self::ElectricMagic;

    /// Persisted id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Unset => "none",
            Self::ElectricMagic => "electric-magic",
            Self::ForestWhisper => "forest-whisper",
            Self::PassingBreeze => "passing-breeze",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Hidden Grove",
            Self::ElectricMagic => "Electric Magic",
            Self::ForestWhisper => "Forest Whisper",
            Self::PassingBreeze => "Passing Breeze",
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Parse a persisted id or a display label, ignoring case and separators
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_kebab_case();
        match normalized.as_str() {
            "none" | "unset" | "hidden-grove" => Some(Self::Unset),
            "electric-magic" => Some(Self::ElectricMagic),
            "forest-whisper" => Some(Self::ForestWhisper),
            "passing-breeze" => Some(Self::PassingBreeze),
            _ => None,
        }
    }
}

impl fmt::Display for SelectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no selection tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown selection tag '{0}'. Expected one of: none, electric-magic, forest-whisper, passing-breeze")]
pub struct ParseTagError(pub String);

impl FromStr for SelectionTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseTagError(s.to_string()))
    }
}

/// Mapping from artist name to its selection tag
///
/// Only concrete tags are stored; an absent name is `Unset`. Updates never
/// mutate in place: every operation returns a new map, so a caller can tell
/// a changed selection from an unchanged one by comparing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionMap(BTreeMap<String, SelectionTag>);

impl SelectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag of `name`, `Unset` when absent
    #[must_use]
    pub fn get(&self, name: &str) -> SelectionTag {
        self.0.get(name).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_tagged(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of tagged artists
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SelectionTag)> {
        self.0.iter().map(|(name, tag)| (name.as_str(), *tag))
    }

    /// Number of artists carrying `tag`
    #[must_use]
    pub fn count(&self, tag: SelectionTag) -> usize {
        self.0.values().filter(|t| **t == tag).count()
    }

    /// A copy of this map where `name` carries `tag`
    ///
    /// Setting `Unset` removes the entry.
    #[must_use]
    pub fn set_tag(&self, name: &str, tag: SelectionTag) -> Self {
        let mut next = self.0.clone();
        if tag.is_set() {
            next.insert(name.to_string(), tag);
        } else {
            next.remove(name);
        }
        Self(next)
    }

    /// Select-all checkbox behaviour over the visible artists
    ///
    /// If any visible artist is tagged, the visible artists are untagged;
    /// otherwise every visible artist gets the primary tag. Tags of artists
    /// outside `visible` are left alone.
    #[must_use]
    pub fn toggle_all<'a, I>(&self, visible: I) -> Self
    where
        I: IntoIterator<Item = &'a ArtistRecord>,
    {
        let visible: Vec<&ArtistRecord> = visible.into_iter().collect();
        let any_tagged = visible.iter().any(|a| self.is_tagged(&a.name));

        let mut next = self.0.clone();
        for artist in visible {
            if any_tagged {
                next.remove(&artist.name);
            } else {
                next.insert(artist.name.clone(), SelectionTag::PRIMARY);
            }
        }
        Self(next)
    }
}

impl FromIterator<(String, SelectionTag)> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = (String, SelectionTag)>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|(_, tag)| tag.is_set()).collect())
    }
}

//! Orderings used by the sort stage
//!
//! Names compare the way a reader expects a lineup to be alphabetised:
//! case-insensitively and with accented letters next to their base letter
//! ("Ólafur" sorts with the O's). Categories and days use fixed rankings
//! rather than alphabetical order.

use crate::catalog::{ArtistRecord, CATEGORIES, DAYS};
use crate::view::SortKey;
use std::cmp::Ordering;

/// Locale-style comparison of two display strings
///
/// Primary: case- and accent-folded text. Ties fall back to the plain
/// lowercase text and then the raw string, so distinct strings never
/// compare equal.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).flat_map(fold_char)
}

fn fold_char(c: char) -> FoldedChar {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'æ' => return FoldedChar::Pair('a', 'e'),
        'œ' => return FoldedChar::Pair('o', 'e'),
        'ß' => return FoldedChar::Pair('s', 's'),
        other => other,
    };
    FoldedChar::One(base)
}

/// One input char folds to one or two output chars
enum FoldedChar {
    One(char),
    Pair(char, char),
    Done,
}

impl Iterator for FoldedChar {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match std::mem::replace(self, Self::Done) {
            Self::One(c) => Some(c),
            Self::Pair(a, b) => {
                *self = Self::One(b);
                Some(a)
            }
            Self::Done => None,
        }
    }
}

/// Billing rank: Headliner, Featured Artists, Supporting Artists, then
/// everything else
#[must_use]
pub fn category_rank(category: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORIES.len())
}

/// Schedule rank: Thursday through Special, then unscheduled, then unknown
/// labels
#[must_use]
pub fn day_rank(day: &str) -> usize {
    DAYS.iter().position(|d| *d == day).unwrap_or(DAYS.len())
}

/// Ascending comparison of two artists by `key`, ties broken by name
#[must_use]
pub fn compare_by(key: SortKey, a: &ArtistRecord, b: &ArtistRecord) -> Ordering {
    let primary = match key {
        SortKey::Name => Ordering::Equal,
        SortKey::Category => category_rank(&a.category).cmp(&category_rank(&b.category)),
        SortKey::Day => day_rank(&a.day).cmp(&day_rank(&b.day)),
    };
    primary.then_with(|| locale_cmp(&a.name, &b.name))
}

//! Output formatting for CLI display
//!
//! This module provides utilities for formatting the lineup view in the
//! CLI: artist rows, the column header, tab badges and the stats line.

pub mod writer;

pub use writer::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::catalog::ArtistRecord;
use crate::pipeline::{LineupStats, TabCounts};
use crate::selection::SelectionTag;
use crate::view::{ActiveTab, SortKey, ViewFilterState};
use colored::{ColoredString, Colorize};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 20;
const DAY_WIDTH: usize = 10;

/// Color a tag label the way it is shown everywhere in the CLI
#[must_use]
pub fn tag_badge(tag: SelectionTag) -> ColoredString {
    match tag {
        SelectionTag::Unset => "·".dimmed(),
        SelectionTag::ElectricMagic => tag.label().magenta().bold(),
        SelectionTag::ForestWhisper => tag.label().green().bold(),
        SelectionTag::PassingBreeze => tag.label().cyan().bold(),
    }
}

/// Format one artist for the list view
///
/// In quiet mode only the name is printed, for piping into other tools.
#[must_use]
pub fn artist_row(artist: &ArtistRecord, tag: SelectionTag, quiet: bool) -> String {
    if quiet {
        return artist.name.clone();
    }
    format!(
        "  {} {} {} {}",
        pad(&artist.name, NAME_WIDTH),
        pad(&artist.category, CATEGORY_WIDTH),
        pad(artist.day_label(), DAY_WIDTH),
        tag_badge(tag)
    )
}

/// Column titles, with an arrow on the sort column
#[must_use]
pub fn header_row(view: &ViewFilterState) -> String {
    let title = |key: SortKey, label: &str, width: usize| {
        if view.sort_key == key {
            pad(&format!("{label} {}", view.sort_direction.arrow()), width)
        } else {
            pad(label, width)
        }
    };
    format!(
        "  {} {} {} {}",
        title(SortKey::Name, "Artist", NAME_WIDTH),
        title(SortKey::Category, "Category", CATEGORY_WIDTH),
        title(SortKey::Day, "Day", DAY_WIDTH),
        "Tag"
    )
    .bold()
    .to_string()
}

/// Tab badges with counts, the active tab highlighted
#[must_use]
pub fn tab_bar(counts: &TabCounts, active: ActiveTab) -> String {
    counts
        .iter()
        .map(|(tab, count)| {
            let badge = format!("{} ({count})", tab.label());
            if tab == active {
                format!("[{badge}]").bold().underline().to_string()
            } else {
                badge
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// The summary line under the list
#[must_use]
pub fn stats_line(stats: &LineupStats) -> String {
    let mut line = format!("Showing {} of {} artists", stats.filtered, stats.total);
    if stats.selected > 0 {
        line.push_str(&format!(", {} selected", stats.selected));
    }
    if let Some(percent) = stats.selected_percent() {
        line.push_str(&format!(" ({percent:.0}% of shown)"));
    }
    line
}

/// Human summary of the active filters, `None` when nothing is filtered
#[must_use]
pub fn filter_summary(view: &ViewFilterState) -> Option<String> {
    if !view.is_filtered() {
        return None;
    }
    let mut parts = Vec::new();
    if !view.query.is_empty() {
        parts.push(format!("name contains \"{}\"", view.query));
    }
    if let Some(category) = view.category_filter() {
        parts.push(format!("category {category}"));
    }
    if let Some(day) = view.day_filter() {
        parts.push(format!("day {day}"));
    }
    Some(format!("Filtered by {}", parts.join(", ")))
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionMap;
    use crate::testing::sample_catalog;
    use crate::view::SortDirection;

    #[test]
    fn test_artist_row_quiet_is_name_only() {
        let artist = ArtistRecord::new("Justice", "Headliner", "Thursday");
        assert_eq!(artist_row(&artist, SelectionTag::ElectricMagic, true), "Justice");
    }

    #[test]
    fn test_artist_row_shows_tba_and_tag() {
        let artist = ArtistRecord::new("Caribou", "Featured Artists", "");
        let row = artist_row(&artist, SelectionTag::ForestWhisper, false);
        assert!(row.contains("Caribou"));
        assert!(row.contains("TBA"));
        assert!(row.contains("Forest Whisper"));
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(pad("Tiësto", 8), "Tiësto  ");
        assert_eq!(pad("Long name", 4), "Long name");
    }

    #[test]
    fn test_header_marks_sort_column() {
        let view = ViewFilterState {
            sort_key: SortKey::Day,
            sort_direction: SortDirection::Desc,
            ..ViewFilterState::default()
        };
        let header = header_row(&view);
        assert!(header.contains(&format!("Day {}", SortDirection::Desc.arrow())));
    }

    #[test]
    fn test_tab_bar_lists_all_tabs() {
        let catalog = sample_catalog();
        let artists: Vec<&ArtistRecord> = catalog.iter().collect();
        let selections = SelectionMap::new().set_tag("Justice", SelectionTag::PassingBreeze);
        let counts = TabCounts::compute(&artists, &selections);

        let bar = tab_bar(&counts, ActiveTab::Untagged);
        assert!(bar.contains("All (3)"));
        assert!(bar.contains("Hidden Grove (2)"));
        assert!(bar.contains("Passing Breeze (1)"));
        assert!(bar.contains("Electric Magic (0)"));
    }

    #[test]
    fn test_stats_line() {
        let stats = LineupStats {
            filtered: 4,
            total: 17,
            selected: 3,
            selected_filtered: 1,
        };
        assert_eq!(stats_line(&stats), "Showing 4 of 17 artists, 3 selected (25% of shown)");

        let none = LineupStats {
            filtered: 17,
            total: 17,
            selected: 0,
            selected_filtered: 0,
        };
        assert_eq!(stats_line(&none), "Showing 17 of 17 artists");
    }

    #[test]
    fn test_filter_summary() {
        assert_eq!(filter_summary(&ViewFilterState::default()), None);
        let view = ViewFilterState {
            query: "jus".into(),
            day: "Friday".into(),
            ..ViewFilterState::default()
        };
        assert_eq!(
            filter_summary(&view).as_deref(),
            Some("Filtered by name contains \"jus\", day Friday")
        );
    }
}

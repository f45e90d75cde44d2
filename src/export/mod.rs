//! Exporting artists as text, name lists and CSV
//!
//! Exports operate on the *export scope*: when any artist in the current
//! view is tagged, exactly the tagged artists (in view order); otherwise the
//! whole filtered and sorted view. The active tab never narrows an export.
//!
//! The formatters are pure and build the complete output in memory; the
//! [`sink`] functions then hand it to a file, the clipboard or stdout.
//!
//! # Examples
//!
//! ```
//! use lineup::catalog::ArtistRecord;
//! use lineup::export::{to_delimited_text, ColumnSelection};
//!
//! let justice = ArtistRecord::new("Justice", "Headliner", "Thursday");
//! let caribou = ArtistRecord::new("Caribou", "Featured Artists", "");
//!
//! let text = to_delimited_text(&[&justice, &caribou], ColumnSelection::default());
//! assert_eq!(text, "Justice - Headliner - Thursday\nCaribou - Featured Artists");
//! ```

pub mod error;
pub mod sink;
pub mod types;

pub use error::ExportError;
pub use types::{ColumnSelection, CsvExtras, MusicService};

use crate::catalog::ArtistRecord;
use crate::selection::SelectionMap;
use crate::store::{self, SettingsRepository, keys};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// File name used when the selection drives the export
pub const SELECTED_FILENAME: &str = "lineup_selected_artists.csv";
/// File name used when the filtered view is exported
pub const FILTERED_FILENAME: &str = "lineup_filtered_artists.csv";

const TEXT_SEPARATOR: &str = " - ";
const NAME_SEPARATOR: &str = ", ";

/// What decided the contents of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeSource {
    /// Tagged artists only
    Selection,
    /// The filtered and sorted view
    View,
}

/// The records an export operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportScope<'a> {
    pub source: ScopeSource,
    pub records: Vec<&'a ArtistRecord>,
}

impl<'a> ExportScope<'a> {
    /// Resolve the scope from the filtered and sorted view
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NothingToExport` if the scope is empty.
    pub fn resolve(view: &[&'a ArtistRecord], selections: &SelectionMap) -> Result<Self, ExportError> {
        let scope = export_scope(view, selections);
        if scope.records.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        Ok(scope)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Default file name for a CSV of this scope
    #[must_use]
    pub const fn filename(&self) -> &'static str {
        export_filename(self.source)
    }
}

/// Tagged artists of `view` when anything is tagged, else all of `view`
///
/// Any stored tag puts the export in selection mode, even when none of the
/// tagged artists pass the current filters; the scope is then empty.
#[must_use]
pub fn export_scope<'a>(view: &[&'a ArtistRecord], selections: &SelectionMap) -> ExportScope<'a> {
    if selections.is_empty() {
        return ExportScope {
            source: ScopeSource::View,
            records: view.to_vec(),
        };
    }

    ExportScope {
        source: ScopeSource::Selection,
        records: view
            .iter()
            .copied()
            .filter(|artist| selections.is_tagged(&artist.name))
            .collect(),
    }
}

#[must_use]
pub const fn export_filename(source: ScopeSource) -> &'static str {
    match source {
        ScopeSource::Selection => SELECTED_FILENAME,
        ScopeSource::View => FILTERED_FILENAME,
    }
}

/// One line per artist with the chosen fields joined by ` - `
///
/// An unscheduled day is left out rather than printed as an empty field.
#[must_use]
pub fn to_delimited_text(records: &[&ArtistRecord], columns: ColumnSelection) -> String {
    records
        .iter()
        .map(|artist| {
            let mut parts = Vec::with_capacity(3);
            if columns.name {
                parts.push(artist.name.as_str());
            }
            if columns.category {
                parts.push(artist.category.as_str());
            }
            if columns.day && artist.is_scheduled() {
                parts.push(artist.day.as_str());
            }
            parts.join(TEXT_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Artist names joined by `, `
#[must_use]
pub fn to_name_list(records: &[&ArtistRecord]) -> String {
    records
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}

/// CSV with a header row and every field quoted
///
/// Columns: the chosen artist fields, then `Selection` (tag label) when
/// requested, then `Spotify ID` and `YouTube ID`. Unscheduled days are
/// written as `TBA`.
///
/// # Errors
///
/// Returns `ExportError` if the CSV writer fails.
pub fn to_csv(
    records: &[&ArtistRecord],
    selections: &SelectionMap,
    columns: ColumnSelection,
    extras: CsvExtras,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(6);
    if columns.name {
        header.push("Name");
    }
    if columns.category {
        header.push("Category");
    }
    if columns.day {
        header.push("Day");
    }
    if extras.selection {
        header.push("Selection");
    }
    header.extend(["Spotify ID", "YouTube ID"]);
    writer.write_record(&header)?;

    for artist in records {
        let mut row = Vec::with_capacity(header.len());
        if columns.name {
            row.push(artist.name.as_str());
        }
        if columns.category {
            row.push(artist.category.as_str());
        }
        if columns.day {
            row.push(artist.day_label());
        }
        if extras.selection {
            let tag = selections.get(&artist.name);
            row.push(if tag.is_set() { tag.label() } else { "" });
        }
        row.push(artist.spotify_id.as_str());
        row.push(artist.youtube_id.as_str());
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidUtf8(e.to_string()))
}

/// External page of `artist` on `service`, if the artist has an id there
#[must_use]
pub fn artist_link(artist: &ArtistRecord, service: MusicService) -> Option<String> {
    match service {
        MusicService::Spotify => artist.spotify_url(),
        MusicService::Youtube => artist.youtube_url(),
        MusicService::None => None,
    }
}

/// Restore the column selection, defaulting to all columns
#[must_use]
pub fn load_columns(repo: &dyn SettingsRepository) -> ColumnSelection {
    store::load_or_default(repo, keys::EXPORT_COLUMNS, ColumnSelection::default())
}

pub fn save_columns(repo: &dyn SettingsRepository, columns: ColumnSelection) {
    store::save_logged(repo, keys::EXPORT_COLUMNS, &columns);
}

/// Restore the music service, defaulting to Spotify
#[must_use]
pub fn load_music_service(repo: &dyn SettingsRepository) -> MusicService {
    store::load_or_default(repo, keys::MUSIC_SERVICE, MusicService::default())
}

pub fn save_music_service(repo: &dyn SettingsRepository, service: MusicService) {
    store::save_logged(repo, keys::MUSIC_SERVICE, &service);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionTag;
    use crate::store::MemoryRepository;
    use crate::testing::sample_catalog;

    fn records(catalog: &crate::catalog::Catalog) -> Vec<&ArtistRecord> {
        catalog.iter().collect()
    }

    #[test]
    fn test_delimited_text_skips_empty_day() {
        let catalog = sample_catalog();
        let text = to_delimited_text(&records(&catalog), ColumnSelection::default());
        assert_eq!(
            text,
            "Tiësto - Headliner - Friday\nJustice - Headliner - Thursday\nCaribou - Featured Artists"
        );
    }

    #[test]
    fn test_delimited_text_respects_columns() {
        let catalog = sample_catalog();
        let columns = ColumnSelection {
            name: true,
            category: false,
            day: true,
        };
        let text = to_delimited_text(&records(&catalog), columns);
        assert_eq!(text, "Tiësto - Friday\nJustice - Thursday\nCaribou");
    }

    #[test]
    fn test_name_list() {
        let catalog = sample_catalog();
        assert_eq!(to_name_list(&records(&catalog)), "Tiësto, Justice, Caribou");
        assert_eq!(to_name_list(&[]), "");
    }

    #[test]
    fn test_csv_header_and_rows() {
        let catalog = sample_catalog();
        let csv = to_csv(
            &records(&catalog)[2..],
            &SelectionMap::new(),
            ColumnSelection::default(),
            CsvExtras::default(),
        )
        .unwrap();
        assert_eq!(
            csv,
            "\"Name\",\"Category\",\"Day\",\"Spotify ID\",\"YouTube ID\"\n\
             \"Caribou\",\"Featured Artists\",\"TBA\",\"\",\"\"\n"
        );
    }

    #[test]
    fn test_csv_selection_column_and_filtered_columns() {
        let catalog = sample_catalog();
        let selections = SelectionMap::new().set_tag("Justice", SelectionTag::ForestWhisper);
        let columns = ColumnSelection {
            name: true,
            category: false,
            day: false,
        };
        let csv = to_csv(
            &records(&catalog),
            &selections,
            columns,
            CsvExtras { selection: true },
        )
        .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"Name\",\"Selection\",\"Spotify ID\",\"YouTube ID\"");
        assert_eq!(lines[1], "\"Tiësto\",\"\",\"\",\"\"");
        assert_eq!(lines[2], "\"Justice\",\"Forest Whisper\",\"\",\"\"");
    }

    #[test]
    fn test_csv_fields_round_trip_through_reader() {
        let tricky = ArtistRecord::new("Earth, Wind & \"Fire\"", "Headliner", "Sunday")
            .with_ids("4QQgXkCYTt3BlENzhyNETg", "UC_x5XG1OV2P6uZZ5FSM9Ttw");
        let exported = to_csv(
            &[&tricky],
            &SelectionMap::new(),
            ColumnSelection::default(),
            CsvExtras::default(),
        )
        .unwrap();
        assert!(exported.contains("\"Earth, Wind & \"\"Fire\"\"\""));

        let mut reader = csv::Reader::from_reader(exported.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Earth, Wind & \"Fire\"");
        assert_eq!(&rows[0][2], "Sunday");
        assert_eq!(&rows[0][3], "4QQgXkCYTt3BlENzhyNETg");
    }

    #[test]
    fn test_scope_prefers_selection_in_view_order() {
        let catalog = sample_catalog();
        let view = records(&catalog);
        let selections = SelectionMap::new()
            .set_tag("Caribou", SelectionTag::PassingBreeze)
            .set_tag("Tiësto", SelectionTag::ElectricMagic);

        let scope = export_scope(&view, &selections);
        assert_eq!(scope.source, ScopeSource::Selection);
        let names: Vec<&str> = scope.records.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Tiësto", "Caribou"]);
        assert_eq!(scope.filename(), "lineup_selected_artists.csv");
    }

    #[test]
    fn test_scope_falls_back_to_view() {
        let catalog = sample_catalog();
        let view = records(&catalog);
        let scope = export_scope(&view, &SelectionMap::new());
        assert_eq!(scope.source, ScopeSource::View);
        assert_eq!(scope.len(), 3);
        assert_eq!(scope.filename(), "lineup_filtered_artists.csv");
    }

    #[test]
    fn test_scope_with_hidden_selection_is_empty() {
        let catalog = sample_catalog();
        let view: Vec<&ArtistRecord> = records(&catalog)
            .into_iter()
            .filter(|a| a.name == "Justice")
            .collect();
        let selections = SelectionMap::new().set_tag("Caribou", SelectionTag::PassingBreeze);

        let scope = export_scope(&view, &selections);
        assert_eq!(scope.source, ScopeSource::Selection);
        assert!(scope.is_empty());
        assert!(matches!(
            ExportScope::resolve(&view, &selections),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn test_empty_scope_is_nothing_to_export() {
        let err = ExportScope::resolve(&[], &SelectionMap::new()).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));
    }

    #[test]
    fn test_artist_link_per_service() {
        let artist = ArtistRecord::new("Goose", "Featured Artists", "Saturday").with_ids("abc", "");
        assert_eq!(
            artist_link(&artist, MusicService::Spotify).as_deref(),
            Some("https://open.spotify.com/artist/abc")
        );
        assert_eq!(artist_link(&artist, MusicService::Youtube), None);
        assert_eq!(artist_link(&artist, MusicService::None), None);
    }

    #[test]
    fn test_preferences_persist() {
        let repo = MemoryRepository::new();
        assert_eq!(load_columns(&repo), ColumnSelection::default());
        assert_eq!(load_music_service(&repo), MusicService::Spotify);

        let columns = ColumnSelection {
            name: true,
            category: false,
            day: true,
        };
        save_columns(&repo, columns);
        save_music_service(&repo, MusicService::Youtube);

        assert_eq!(load_columns(&repo), columns);
        assert_eq!(load_music_service(&repo), MusicService::Youtube);
        assert_eq!(repo.get(keys::MUSIC_SERVICE).unwrap().as_deref(), Some("\"youtube\""));
    }
}

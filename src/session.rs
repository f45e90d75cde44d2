//! Lineup session and builder pattern
//!
//! A [`Session`] ties the catalog to the persisted state and is the single
//! entry point the commands work through:
//! ```
//! use lineup::catalog::Catalog;
//! use lineup::selection::SelectionTag;
//! use lineup::session::Session;
//! use lineup::store::MemoryRepository;
//! # fn example() -> lineup::Result<()> {
//! let mut session = Session::builder()
//!     .repository(MemoryRepository::new())
//!     .catalog(Catalog::bundled()?)
//!     .build()?;
//!
//! session.set_query("justice");
//! session.set_tag("Justice", SelectionTag::ElectricMagic)?;
//! assert_eq!(session.visible().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Every state transition persists the keys it touched straight away.
//! Persistence failures are logged by the store helpers and never surface
//! here; the session keeps working on its in-memory state.

use crate::catalog::{ArtistRecord, Catalog};
use crate::export::{self, ColumnSelection, ExportError, ExportScope, MusicService};
use crate::pipeline::{self, LineupStats, TabCounts};
use crate::playlist::{PlaylistError, PlaylistRequest};
use crate::selection::{self, SelectionMap, SelectionTag};
use crate::store::{self, SettingsRepository, StoreError};
use crate::view::{ActiveTab, SortKey, ViewField, ViewFilterState};
use crate::{LineupError, Result};
use tracing::debug;

/// Catalog plus persisted user state
///
/// Use `Session::builder()` to construct.
pub struct Session {
    repo: Box<dyn SettingsRepository>,
    catalog: Catalog,
    selections: SelectionMap,
    view: ViewFilterState,
    columns: ColumnSelection,
    music_service: MusicService,
}

impl Session {
    /// Create a new builder for constructing a `Session`
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn selections(&self) -> &SelectionMap {
        &self.selections
    }

    #[must_use]
    pub const fn view(&self) -> &ViewFilterState {
        &self.view
    }

    #[must_use]
    pub const fn columns(&self) -> ColumnSelection {
        self.columns
    }

    #[must_use]
    pub const fn music_service(&self) -> MusicService {
        self.music_service
    }

    /// The artists on the active tab, filtered and sorted
    #[must_use]
    pub fn visible(&self) -> Vec<&ArtistRecord> {
        pipeline::compute_visible_artists(&self.catalog, &self.view, &self.selections)
    }

    /// The filtered and sorted artists, ignoring the active tab
    #[must_use]
    pub fn filtered(&self) -> Vec<&ArtistRecord> {
        pipeline::filtered_and_sorted(&self.catalog, &self.view)
    }

    #[must_use]
    pub fn tab_counts(&self) -> TabCounts {
        TabCounts::compute(&self.filtered(), &self.selections)
    }

    #[must_use]
    pub fn stats(&self) -> LineupStats {
        LineupStats::compute(&self.catalog, &self.filtered(), &self.selections)
    }

    /// Find an artist by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `LineupError::UnknownArtist` if no artist has that name.
    pub fn artist(&self, name: &str) -> Result<&ArtistRecord> {
        self.catalog
            .find_ignore_case(name)
            .ok_or_else(|| LineupError::UnknownArtist(name.to_string()))
    }

    /// Tag `name`, or untag it with `SelectionTag::Unset`
    ///
    /// # Errors
    ///
    /// Returns `LineupError::UnknownArtist` if the catalog has no artist
    /// with exactly that name.
    pub fn set_tag(&mut self, name: &str, tag: SelectionTag) -> Result<()> {
        if !self.catalog.contains(name) {
            return Err(LineupError::UnknownArtist(name.to_string()));
        }
        self.selections = self.selections.set_tag(name, tag);
        debug!(artist = name, tag = tag.id(), "tag set");
        selection::save(self.repo.as_ref(), &self.selections);
        Ok(())
    }

    /// Select-all over the visible artists
    ///
    /// Returns `true` if the visible artists were tagged, `false` if their
    /// tags were cleared.
    pub fn toggle_all_visible(&mut self) -> bool {
        let visible = self.visible();
        let tagging = !visible.iter().any(|a| self.selections.is_tagged(&a.name));
        let next = self.selections.toggle_all(visible);
        self.selections = next;
        selection::save(self.repo.as_ref(), &self.selections);
        tagging
    }

    /// Remove every tag
    pub fn clear_selections(&mut self) {
        self.selections = SelectionMap::new();
        selection::save(self.repo.as_ref(), &self.selections);
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
        self.view.save_field(self.repo.as_ref(), ViewField::Sort);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
        self.view.save_field(self.repo.as_ref(), ViewField::Query);
    }

    /// Filter by category, `"All"` to show every category
    ///
    /// # Errors
    ///
    /// Returns `LineupError::InvalidInput` if no artist is billed under
    /// `category`.
    pub fn set_category(&mut self, category: &str) -> Result<()> {
        let resolved = self
            .catalog
            .available_categories()
            .into_iter()
            .find(|c| c.eq_ignore_ascii_case(category))
            .map(str::to_string)
            .ok_or_else(|| LineupError::InvalidInput(format!("Unknown category '{category}'")))?;
        self.view.category = resolved;
        self.view.save_field(self.repo.as_ref(), ViewField::Category);
        Ok(())
    }

    /// Filter by day, `"All"` to show every day
    ///
    /// # Errors
    ///
    /// Returns `LineupError::InvalidInput` if no artist plays on `day`.
    pub fn set_day(&mut self, day: &str) -> Result<()> {
        let resolved = self
            .catalog
            .available_days()
            .into_iter()
            .find(|d| d.eq_ignore_ascii_case(day))
            .map(str::to_string)
            .ok_or_else(|| LineupError::InvalidInput(format!("Unknown day '{day}'")))?;
        self.view.day = resolved;
        self.view.save_field(self.repo.as_ref(), ViewField::Day);
        Ok(())
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.view.active_tab = tab;
        self.view.save_field(self.repo.as_ref(), ViewField::ActiveTab);
    }

    pub fn set_columns(&mut self, columns: ColumnSelection) {
        self.columns = columns;
        export::save_columns(self.repo.as_ref(), columns);
    }

    pub fn set_music_service(&mut self, service: MusicService) {
        self.music_service = service;
        export::save_music_service(self.repo.as_ref(), service);
    }

    /// Forget every selection and preference, persisting the defaults
    pub fn reset_all(&mut self) {
        store::clear_all(self.repo.as_ref());

        self.view.reset();
        self.selections = SelectionMap::new();
        self.columns = ColumnSelection::default();
        self.music_service = MusicService::default();

        self.view.save(self.repo.as_ref());
        selection::save(self.repo.as_ref(), &self.selections);
        export::save_columns(self.repo.as_ref(), self.columns);
        export::save_music_service(self.repo.as_ref(), self.music_service);
        debug!("session reset");
    }

    /// The records exports operate on
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NothingToExport` if there is nothing to export.
    pub fn export_records(&self) -> std::result::Result<ExportScope<'_>, ExportError> {
        ExportScope::resolve(&self.filtered(), &self.selections)
    }

    /// A playlist request over the export scope
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::NoArtists` if there is nothing to export.
    pub fn playlist_request(&self, name: &str) -> std::result::Result<PlaylistRequest, PlaylistError> {
        let scope = self.export_records().map_err(|_| PlaylistError::NoArtists)?;
        Ok(PlaylistRequest::new(name, self.music_service, scope.len()))
    }

    /// Flush pending writes to the store
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot flush.
    pub fn flush(&self) -> std::result::Result<(), StoreError> {
        self.repo.flush()
    }
}

/// Builder for [`Session`]
#[derive(Default)]
pub struct SessionBuilder {
    repo: Option<Box<dyn SettingsRepository>>,
    catalog: Option<Catalog>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the settings repository (required)
    #[must_use]
    pub fn repository<R: SettingsRepository + 'static>(mut self, repo: R) -> Self {
        self.repo = Some(Box::new(repo));
        self
    }

    /// Set an already boxed settings repository
    #[must_use]
    pub fn boxed_repository(mut self, repo: Box<dyn SettingsRepository>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Set the artist catalog (required)
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the `Session`, restoring persisted state
    ///
    /// Legacy selections are upgraded here, once.
    ///
    /// # Errors
    ///
    /// Returns `LineupError::Build` if the repository or catalog is missing.
    pub fn build(self) -> Result<Session> {
        let repo = self
            .repo
            .ok_or_else(|| LineupError::Build("a settings repository is required".to_string()))?;
        let catalog = self
            .catalog
            .ok_or_else(|| LineupError::Build("a catalog is required".to_string()))?;

        let selections = selection::bootstrap(repo.as_ref());
        let view = ViewFilterState::load(repo.as_ref());
        let columns = export::load_columns(repo.as_ref());
        let music_service = export::load_music_service(repo.as_ref());

        debug!(
            artists = catalog.len(),
            selected = selections.len(),
            "session restored"
        );

        Ok(Session {
            repo,
            catalog,
            selections,
            view,
            columns,
            music_service,
        })
    }
}

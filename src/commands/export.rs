//! Export, columns, service and open commands

use crate::cli::ExportFormat;
use crate::export::{
    self, ColumnSelection, CsvExtras, ExportError, ExportScope, MusicService, ScopeSource, sink,
};
use crate::output::OutputWriter;
use crate::{LineupError, Result, Session};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where an export goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// The scope's default file name in the working directory
    DefaultFile,
    Clipboard,
}

impl Destination {
    /// `output` is `Some(None)` when `--output` was given without a path
    #[must_use]
    pub fn from_args(output: Option<Option<PathBuf>>, clipboard: bool) -> Self {
        match (output, clipboard) {
            (_, true) => Self::Clipboard,
            (Some(Some(path)), false) => Self::File(path),
            (Some(None), false) => Self::DefaultFile,
            (None, false) => Self::Stdout,
        }
    }
}

/// Execute the export command
///
/// Nothing to export is reported as a warning, not an error.
///
/// # Errors
///
/// Returns `LineupError::ExportError` if the output cannot be built or
/// written.
pub fn execute(
    session: &Session,
    format: ExportFormat,
    destination: Destination,
    selection_column: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let Some(scope) = resolve_scope(session, output)? else {
        return Ok(());
    };

    let text = render(session, &scope, format, selection_column)?;
    let noun = scope_noun(&scope);

    match destination {
        Destination::Stdout => {
            output.info(&format!("Exporting {} {noun} artist(s)", scope.len()));
            output.write(text.trim_end_matches('\n'));
        }
        Destination::File(path) => export_to_file(&scope, &path, &text, output)?,
        Destination::DefaultFile => {
            export_to_file(&scope, &default_path(&scope, format), &text, output)?;
        }
        Destination::Clipboard => {
            sink::copy_to_clipboard(&text)?;
            output.success(&format!("Copied {} {noun} artist(s) to the clipboard", scope.len()));
        }
    }
    Ok(())
}

fn export_to_file(
    scope: &ExportScope<'_>,
    path: &Path,
    text: &str,
    output: &dyn OutputWriter,
) -> std::result::Result<(), ExportError> {
    sink::write_file(path, text)?;
    output.success(&format!(
        "Exported {} {} artist(s) to {}",
        scope.len(),
        scope_noun(scope),
        path.display()
    ));
    Ok(())
}

/// Build the export text for `scope`
///
/// # Errors
///
/// Returns `ExportError` if the CSV writer fails.
pub fn render(
    session: &Session,
    scope: &ExportScope<'_>,
    format: ExportFormat,
    selection_column: bool,
) -> std::result::Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(export::to_delimited_text(&scope.records, session.columns())),
        ExportFormat::Names => Ok(export::to_name_list(&scope.records)),
        ExportFormat::Csv => export::to_csv(
            &scope.records,
            session.selections(),
            session.columns(),
            CsvExtras {
                selection: selection_column,
            },
        ),
    }
}

/// Default output file for `scope` in `format`
#[must_use]
pub fn default_path(scope: &ExportScope<'_>, format: ExportFormat) -> PathBuf {
    let path = Path::new(scope.filename());
    match format {
        ExportFormat::Csv => path.to_path_buf(),
        ExportFormat::Text | ExportFormat::Names => path.with_extension("txt"),
    }
}

/// Execute the columns command - show or change the exported fields
///
/// # Errors
///
/// Returns `LineupError::InvalidInput` if the change would disable every
/// column.
pub fn columns(
    session: &mut Session,
    name: Option<bool>,
    category: Option<bool>,
    day: Option<bool>,
    output: &dyn OutputWriter,
) -> Result<()> {
    let current = session.columns();
    let next = ColumnSelection {
        name: name.unwrap_or(current.name),
        category: category.unwrap_or(current.category),
        day: day.unwrap_or(current.day),
    };

    if !next.any() {
        return Err(LineupError::InvalidInput(
            "At least one export column must stay enabled".to_string(),
        ));
    }
    if next != current {
        session.set_columns(next);
    }

    let flag = |on: bool| if on { "on" } else { "off" };
    output.write(&format!(
        "name: {}, category: {}, day: {}",
        flag(next.name),
        flag(next.category),
        flag(next.day)
    ));
    Ok(())
}

/// Execute the service command
pub fn service(session: &mut Session, service: MusicService, output: &dyn OutputWriter) {
    session.set_music_service(service);
    if service.is_enabled() {
        output.success(&format!("Music service set to {service}"));
    } else {
        output.success("Music service links disabled");
    }
}

/// Execute the open command - open artist pages on the music service
///
/// Artists without an id on the service are skipped. With `print`, the
/// links are written instead of opened.
///
/// # Errors
///
/// Returns `LineupError::ExportError` if the export scope cannot be built.
pub fn open(session: &Session, print: bool, output: &dyn OutputWriter) -> Result<()> {
    let service = session.music_service();
    if !service.is_enabled() {
        output.warning("No music service selected; choose one with `lineup service`");
        return Ok(());
    }
    let Some(scope) = resolve_scope(session, output)? else {
        return Ok(());
    };

    let links: Vec<String> = scope
        .records
        .iter()
        .filter_map(|artist| export::artist_link(artist, service))
        .collect();
    if links.is_empty() {
        output.warning(&format!(
            "None of the {} artist(s) has a {service} link",
            scope.len()
        ));
        return Ok(());
    }

    let mut opened = 0;
    for link in &links {
        if print {
            output.write(link);
            continue;
        }
        match open::that(link) {
            Ok(()) => opened += 1,
            Err(e) => {
                warn!(link = %link, error = %e, "failed to open link");
                output.error(&format!("Could not open {link}: {e}"));
            }
        }
    }
    if !print {
        output.success(&format!("Opened {opened} {service} page(s)"));
    }
    Ok(())
}

/// The export scope, or `None` after reporting that there is nothing to export
fn resolve_scope<'a>(
    session: &'a Session,
    output: &dyn OutputWriter,
) -> Result<Option<ExportScope<'a>>> {
    match session.export_records() {
        Ok(scope) => Ok(Some(scope)),
        Err(e) if e.is_notice() => {
            output.warning(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

const fn scope_noun(scope: &ExportScope<'_>) -> &'static str {
    match scope.source {
        ScopeSource::Selection => "selected",
        ScopeSource::View => "filtered",
    }
}

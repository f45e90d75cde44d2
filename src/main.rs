//! Lineup CLI application entry point
//!
//! This is the main executable for the lineup explorer. It provides a
//! command-line interface for browsing a festival lineup, tagging artists
//! and exporting the picks.
//!
//! # Usage
//!
//! ```bash
//! # Show the lineup (default command)
//! lineup
//! lineup list
//!
//! # Narrow the view
//! lineup search jus
//! lineup filter --category Headliner --day Friday
//! lineup sort day
//!
//! # Tag artists
//! lineup tag "Justice" electric-magic
//! lineup tag "Caribou"            # pick the tag interactively
//!
//! # Export the selection (or the filtered view when nothing is tagged)
//! lineup export csv --output
//! lineup export names --clipboard
//!
//! # Quiet mode (only output results)
//! lineup -q list
//! ```
//!
//! # Configuration
//!
//! On first run, lineup will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/lineup/config.toml` on
//! Linux). Set `RUST_LOG` to control log output on stderr.

use lineup::{
    LineupError, Session,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::LineupConfig,
    output::{OutputWriter, StdoutWriter},
    playlist::PlaylistTask,
    store::{MemoryRepository, SettingsRepository, SledRepository},
};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, LineupError>;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "lineup=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Open the settings repository chosen by flags and config
fn open_repository(cli: &Cli, config: &LineupConfig) -> Result<Box<dyn SettingsRepository>> {
    if cli.ephemeral {
        debug!("using in-memory settings store");
        return Ok(Box::new(MemoryRepository::new()));
    }

    let path = match &cli.store {
        Some(path) => path.clone(),
        None => config.resolved_store_path()?,
    };
    debug!(path = %path.display(), "opening settings store");
    Ok(Box::new(SledRepository::open(&path)?))
}

/// Load the catalog chosen by flags and config, or the bundled lineup
fn load_catalog(cli: &Cli, config: &LineupConfig) -> Result<Catalog> {
    let catalog = match cli.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog");
            Catalog::load(path)?
        }
        None => Catalog::bundled()?,
    };

    if !catalog.duplicates().is_empty() {
        warn!(
            duplicates = ?catalog.duplicates(),
            "catalog lists some artists more than once; later entries were ignored"
        );
    }
    Ok(catalog)
}

fn open_session(cli: &Cli, config: &LineupConfig) -> Result<Session> {
    Session::builder()
        .boxed_repository(open_repository(cli, config)?)
        .catalog(load_catalog(cli, config)?)
        .build()
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        commands::completions(shell, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = LineupConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;
    let writer = StdoutWriter::quiet(quiet);
    let output: &dyn OutputWriter = &writer;

    if let Commands::Config { command } = &command {
        let path = LineupConfig::config_path()?;
        return commands::config(&mut config, command, &path, output);
    }

    let mut session = open_session(cli, &config)?;

    match command {
        Commands::List => commands::list(&session, output, quiet),
        Commands::Search { query } => {
            commands::view::search(&mut session, query, output);
            commands::list(&session, output, quiet);
        }
        Commands::Filter { category, day, clear } => {
            commands::view::filter(&mut session, category.as_deref(), day.as_deref(), clear, output)?;
            commands::list(&session, output, quiet);
        }
        Commands::Tab { tab } => {
            commands::view::tab(&mut session, tab, output);
            commands::list(&session, output, quiet);
        }
        Commands::Sort { key } => {
            commands::view::sort(&mut session, key, output);
            commands::list(&session, output, quiet);
        }
        Commands::Tag { artist, tag } => commands::tag(&mut session, &artist, tag, output)?,
        Commands::Untag { artist } => commands::tag::untag(&mut session, &artist, output)?,
        Commands::SelectAll => commands::tag::select_all(&mut session, output),
        Commands::Clear => commands::tag::clear(&mut session, output),
        Commands::Export {
            format,
            output: path,
            clipboard,
            selection_column,
        } => {
            let destination = commands::export::Destination::from_args(path, clipboard);
            commands::export(&session, format, destination, selection_column, output)?;
        }
        Commands::Columns { name, category, day } => {
            commands::export::columns(&mut session, name, category, day, output)?;
        }
        Commands::Service { service } => commands::export::service(&mut session, service, output),
        Commands::Open { print } => commands::export::open(&session, print, output)?,
        Commands::Playlist { name } => {
            let task = PlaylistTask::new();
            commands::playlist(&session, &task, name.as_deref(), config.playlist_delay(), output)?;
        }
        Commands::Days => commands::list::days(&session, output),
        Commands::Reset { yes } => commands::reset(&mut session, yes, output)?,
        Commands::Completions { .. } | Commands::Config { .. } => {}
    }

    if let Err(e) = session.flush() {
        warn!(error = %e, "failed to flush settings store");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

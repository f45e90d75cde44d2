//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for lineup using the `clap`
//! crate.
//!
//! # Commands
//!
//! - **list**: Print the current view (default)
//! - **search** / **filter** / **tab** / **sort**: Change what the view shows
//! - **tag** / **untag** / **select-all** / **clear**: Manage selections
//! - **export**: Text, name list or CSV, to stdout, a file or the clipboard
//! - **open** / **playlist**: Music service actions over the export scope
//!
//! # Design Features
//!
//! - Every command changes persisted state, so each invocation picks up
//!   where the previous one ended
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `t` for `tag`, `ls` for `list`)
//!
//! # Examples
//!
//! ```
//! use lineup::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["lineup", "tag", "Justice", "forest-whisper"]);
//! assert!(matches!(cli.get_command(), Commands::Tag { .. }));
//! ```

use crate::export::MusicService;
use crate::selection::SelectionTag;
use crate::view::{ActiveTab, SortKey};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Export output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One line per artist, fields joined by " - "
    Text,
    /// Artist names joined by ", "
    Names,
    /// CSV with a header row
    Csv,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., catalog_path)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "lineup")]
#[command(about = "Explore, tag and export a festival lineup", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Settings store directory (overrides config)
    #[arg(long = "store", value_name = "DIR", global = true, conflicts_with = "ephemeral")]
    pub store: Option<PathBuf>,

    /// Keep state in memory only; nothing is read from or written to disk
    #[arg(long = "ephemeral", global = true)]
    pub ephemeral: bool,

    /// Catalog JSON file (overrides config)
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the visible artists, tab counts and stats (default)
    #[command(visible_alias = "ls")]
    List,

    /// Filter artists by name; no query clears the search
    #[command(visible_alias = "s")]
    Search {
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Filter artists by category and day
    #[command(visible_alias = "f")]
    Filter {
        /// Category, or "All"
        #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
        category: Option<String>,

        /// Day, or "All"
        #[arg(short = 'd', long = "day", value_name = "DAY")]
        day: Option<String>,

        /// Clear the search, category and day filters
        #[arg(long = "clear", conflicts_with_all = ["category", "day"])]
        clear: bool,
    },

    /// Switch the selection tab (all, none, or a tag)
    Tab {
        #[arg(value_name = "TAB", value_parser = parse_tab)]
        tab: ActiveTab,
    },

    /// Sort by a column; sorting by the current column flips the direction
    Sort {
        #[arg(value_name = "COLUMN")]
        key: SortKey,
    },

    /// Tag an artist; prompts for the tag when none is given
    #[command(visible_alias = "t")]
    Tag {
        #[arg(value_name = "ARTIST")]
        artist: String,

        /// electric-magic, forest-whisper or passing-breeze
        #[arg(value_name = "TAG")]
        tag: Option<SelectionTag>,
    },

    /// Remove an artist's tag
    #[command(visible_alias = "u")]
    Untag {
        #[arg(value_name = "ARTIST")]
        artist: String,
    },

    /// Tag every visible artist, or untag them if any is tagged
    SelectAll,

    /// Remove every tag
    Clear,

    /// Export the selection, or the filtered view when nothing is tagged
    #[command(visible_alias = "x")]
    Export {
        #[arg(value_name = "FORMAT", default_value = "text")]
        format: ExportFormat,

        /// Write to a file instead of stdout; without FILE, use the default name
        #[arg(short = 'o', long = "output", value_name = "FILE", num_args = 0..=1)]
        output: Option<Option<PathBuf>>,

        /// Copy to the clipboard instead of stdout
        #[arg(short = 'c', long = "clipboard", conflicts_with = "output")]
        clipboard: bool,

        /// Add a Selection column to CSV output
        #[arg(long = "selection-column")]
        selection_column: bool,
    },

    /// Choose which fields text and CSV exports include
    Columns {
        #[arg(long = "name", value_name = "BOOL", action = ArgAction::Set)]
        name: Option<bool>,

        #[arg(long = "category", value_name = "BOOL", action = ArgAction::Set)]
        category: Option<bool>,

        #[arg(long = "day", value_name = "BOOL", action = ArgAction::Set)]
        day: Option<bool>,
    },

    /// Choose the music service for links and playlists
    Service {
        #[arg(value_name = "SERVICE")]
        service: MusicService,
    },

    /// Open the export scope's artist pages in the browser
    Open {
        /// Print the links instead of opening them
        #[arg(long = "print")]
        print: bool,
    },

    /// Create a radio playlist from the export scope
    Playlist {
        #[arg(short = 'n', long = "name", value_name = "NAME")]
        name: Option<String>,
    },

    /// List the day filter options
    Days,

    /// Forget every tag, filter and preference
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn parse_tab(input: &str) -> Result<ActiveTab, String> {
    ActiveTab::parse(input).ok_or_else(|| {
        let known: Vec<&str> = ActiveTab::TABS.iter().map(|t| t.id()).collect();
        format!("unknown tab '{input}' (expected one of: {})", known.join(", "))
    })
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}

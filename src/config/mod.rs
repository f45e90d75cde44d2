//! Configuration module for lineup
//!
//! Manages application configuration: where the settings store lives, which
//! catalog to load and a few behaviour defaults. Configuration is stored in
//! the user's config directory (`~/.config/lineup/config.toml` on Linux).

mod setup;

pub use setup::first_time_setup;

use crate::playlist::DEFAULT_DELAY;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted by `config get` and `config set`
pub const KEYS: [&str; 4] = ["store_path", "catalog_path", "quiet", "playlist_delay_ms"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LineupConfig {
    /// Directory of the settings store; the data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Catalog JSON file; the bundled lineup when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Simulated playlist creation time in milliseconds
    #[serde(default = "default_playlist_delay_ms")]
    pub playlist_delay_ms: u64,
}

#[allow(clippy::cast_possible_truncation)]
const fn default_playlist_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            catalog_path: None,
            quiet: false,
            playlist_delay_ms: default_playlist_delay_ms(),
        }
    }
}

impl LineupConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("lineup").join("config.toml"))
    }

    /// Default settings store location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_store_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;

        Ok(data_dir.join("lineup").join("store"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Settings store location, falling back to the data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn resolved_store_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_store_path(),
        }
    }

    #[must_use]
    pub const fn playlist_delay(&self) -> Duration {
        Duration::from_millis(self.playlist_delay_ms)
    }

    /// Current value of `key` as text; unset paths read as an empty string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let display = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        match key {
            "store_path" => Ok(display(&self.store_path)),
            "catalog_path" => Ok(display(&self.catalog_path)),
            "quiet" => Ok(self.quiet.to_string()),
            "playlist_delay_ms" => Ok(self.playlist_delay_ms.to_string()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Set `key` from text; an empty value clears a path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value of the wrong type.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let path = |value: &str| (!value.is_empty()).then(|| PathBuf::from(value));
        match key {
            "store_path" => self.store_path = path(value),
            "catalog_path" => self.catalog_path = path(value),
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("'{value}' is not true or false")))?;
            }
            "playlist_delay_ms" => {
                self.playlist_delay_ms = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("'{value}' is not a number of milliseconds")))?;
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LineupConfig::default();
        assert!(config.store_path.is_none());
        assert!(config.catalog_path.is_none());
        assert!(!config.quiet);
        assert_eq!(config.playlist_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lineup").join("config.toml");

        let config = LineupConfig::load_from(&path).unwrap();
        assert_eq!(config, LineupConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = LineupConfig::default();
        config.set_value("catalog_path", "/srv/festival/lineup.json").unwrap();
        config.set_value("quiet", "true").unwrap();
        config.set_value("playlist_delay_ms", "250").unwrap();
        config.save_to(&path).unwrap();

        let loaded = LineupConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.catalog_path, Some(PathBuf::from("/srv/festival/lineup.json")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = LineupConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert_eq!(config.playlist_delay_ms, 2000);
    }

    #[test]
    fn test_get_and_set_values() {
        let mut config = LineupConfig::default();
        assert_eq!(config.get_value("store_path").unwrap(), "");

        config.set_value("store_path", "/tmp/lineup-store").unwrap();
        assert_eq!(config.get_value("store_path").unwrap(), "/tmp/lineup-store");
        assert_eq!(config.resolved_store_path().unwrap(), PathBuf::from("/tmp/lineup-store"));

        config.set_value("store_path", "").unwrap();
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = LineupConfig::default();
        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("playlist_delay_ms", "soon").is_err());
        assert!(matches!(config.set_value("colour", "red"), Err(ConfigError::NotFound(_))));
        assert!(matches!(config.get_value("colour"), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = LineupConfig::default();
        for key in KEYS {
            assert!(config.get_value(key).is_ok(), "{key}");
        }
    }
}

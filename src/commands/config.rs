//! Config command

use crate::cli::ConfigCommands;
use crate::config::{KEYS, LineupConfig};
use crate::output::OutputWriter;
use crate::{LineupError, Result};
use std::path::Path;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
///
/// Returns `LineupError` for a malformed setting, an unknown key or a
/// failed save.
pub fn execute(
    config: &mut LineupConfig,
    command: &ConfigCommands,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                LineupError::InvalidInput(format!("Expected KEY=VALUE, got '{setting}'"))
            })?;
            let key = key.trim();
            config
                .set_value(key, value.trim())
                .map_err(|e| unknown_key_hint(key, e))?;
            config.save_to(path)?;
            output.success(&format!("Set {key} = {}", config.get_value(key)?));
        }
        ConfigCommands::Get { key } => {
            let value = config.get_value(key).map_err(|e| unknown_key_hint(key, e))?;
            output.write(&value);
        }
        ConfigCommands::Path => output.write(&path.display().to_string()),
    }
    Ok(())
}

fn unknown_key_hint(key: &str, error: ::config::ConfigError) -> LineupError {
    match error {
        ::config::ConfigError::NotFound(_) => LineupError::InvalidInput(format!(
            "Unknown config key '{key}' (expected one of: {})",
            KEYS.join(", ")
        )),
        other => other.into(),
    }
}

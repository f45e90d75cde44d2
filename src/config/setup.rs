//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts for creating an initial configuration
//! when lineup is run for the first time.

use super::LineupConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::IsTerminal;
use std::path::PathBuf;

/// First-time setup - prompts for the store location and catalog file
///
/// Without a terminal on stdin the defaults are saved without prompting.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<LineupConfig, ConfigError> {
    let mut config = LineupConfig::default();

    if !std::io::stdin().is_terminal() {
        config.save()?;
        return Ok(config);
    }

    println!("Welcome to lineup! Let's set up where your picks are kept.\n");

    let default_store = LineupConfig::default_store_path()?;
    let store_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Store location")
        .default(default_store.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let catalog_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog file (leave empty for the bundled lineup)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let store_path = PathBuf::from(store_path);
    config.store_path = (store_path != default_store).then_some(store_path);
    config.catalog_path = (!catalog_path.trim().is_empty()).then(|| PathBuf::from(catalog_path.trim()));

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_module_compiles() {
        let _: fn() -> Result<LineupConfig, ConfigError> = first_time_setup;
    }
}

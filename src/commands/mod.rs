//! Command implementations
//!
//! Each command is a module with functions that take parsed CLI args and
//! run the operation against a [`Session`](crate::Session), reporting
//! through an [`OutputWriter`](crate::output::OutputWriter).

pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod playlist;
pub mod reset;
pub mod tag;
pub mod view;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use config::execute as config;
pub use export::execute as export;
pub use list::execute as list;
pub use playlist::execute as playlist;
pub use reset::execute as reset;
pub use tag::execute as tag;

use crate::LineupError;
use std::io::IsTerminal;

/// Fail unless an interactive prompt can be shown
fn require_terminal(what: &str) -> Result<(), LineupError> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(LineupError::InvalidInput(format!(
            "{what} needs an interactive terminal"
        )))
    }
}

//! Reset command

use super::require_terminal;
use crate::output::OutputWriter;
use crate::{Result, Session};
use dialoguer::{Confirm, theme::ColorfulTheme};

/// Execute the reset command - forget every tag, filter and preference
///
/// Asks for confirmation unless `yes` is set.
///
/// # Errors
///
/// Returns an error if confirmation is needed but cannot be asked for.
pub fn execute(session: &mut Session, yes: bool, output: &dyn OutputWriter) -> Result<()> {
    if !yes && !confirm(session.selections().len())? {
        output.info("Reset cancelled");
        return Ok(());
    }

    session.reset_all();
    output.success("All tags, filters and preferences were reset");
    Ok(())
}

fn confirm(selected: usize) -> Result<bool> {
    require_terminal("Confirming a reset (pass --yes to skip)")?;

    let prompt = if selected > 0 {
        format!("Forget {selected} tagged artist(s), filters and preferences?")
    } else {
        "Forget all filters and preferences?".to_string()
    };

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

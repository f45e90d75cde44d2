//! Tag, untag, select-all and clear commands

use super::require_terminal;
use crate::output::OutputWriter;
use crate::selection::SelectionTag;
use crate::{Result, Session};
use dialoguer::{Select, theme::ColorfulTheme};

/// Execute the tag command - tag an artist, prompting when no tag is given
///
/// The artist name is matched ignoring case.
///
/// # Errors
///
/// Returns `LineupError::UnknownArtist` if no artist has that name, or an
/// error if the prompt cannot be shown.
pub fn execute(
    session: &mut Session,
    artist: &str,
    tag: Option<SelectionTag>,
    output: &dyn OutputWriter,
) -> Result<()> {
    let name = session.artist(artist)?.name.clone();
    let tag = match tag {
        Some(tag) => tag,
        None => prompt_tag(&name, session.selections().get(&name))?,
    };

    session.set_tag(&name, tag)?;
    if tag.is_set() {
        output.success(&format!("Tagged {name} as {}", tag.label()));
    } else {
        output.success(&format!("Untagged {name}"));
    }
    Ok(())
}

/// Execute the untag command
///
/// # Errors
///
/// Returns `LineupError::UnknownArtist` if no artist has that name.
pub fn untag(session: &mut Session, artist: &str, output: &dyn OutputWriter) -> Result<()> {
    let name = session.artist(artist)?.name.clone();
    if !session.selections().is_tagged(&name) {
        output.info(&format!("{name} has no tag"));
        return Ok(());
    }
    session.set_tag(&name, SelectionTag::Unset)?;
    output.success(&format!("Untagged {name}"));
    Ok(())
}

/// Execute the select-all command over the visible artists
pub fn select_all(session: &mut Session, output: &dyn OutputWriter) {
    let visible = session.visible().len();
    if visible == 0 {
        output.info("No visible artists to select");
        return;
    }
    if session.toggle_all_visible() {
        output.success(&format!(
            "Tagged {visible} artist(s) as {}",
            SelectionTag::PRIMARY.label()
        ));
    } else {
        output.success(&format!("Cleared tags of {visible} visible artist(s)"));
    }
}

/// Execute the clear command - remove every tag
pub fn clear(session: &mut Session, output: &dyn OutputWriter) {
    let count = session.selections().len();
    session.clear_selections();
    output.success(&format!("Cleared {count} tag(s)"));
}

fn prompt_tag(name: &str, current: SelectionTag) -> Result<SelectionTag> {
    require_terminal("Choosing a tag interactively")?;

    let choices: Vec<SelectionTag> = SelectionTag::CONCRETE
        .into_iter()
        .chain([SelectionTag::Unset])
        .collect();
    let labels: Vec<&str> = choices.iter().map(|t| t.label()).collect();
    let default = choices.iter().position(|t| *t == current).unwrap_or(0);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Tag for {name}"))
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(choices[index])
}

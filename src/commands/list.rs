//! List and days commands

use crate::Session;
use crate::output::{self, OutputWriter};

/// Execute the list command - print the visible artists
///
/// Quiet mode prints artist names only, one per line.
pub fn execute(session: &Session, output: &dyn OutputWriter, quiet: bool) {
    let view = session.view();
    let visible = session.visible();

    if !quiet {
        output.write(&output::tab_bar(&session.tab_counts(), view.active_tab));
        if let Some(summary) = output::filter_summary(view) {
            output.info(&summary);
        }
        output.write(&output::header_row(view));
    }

    if visible.is_empty() {
        output.info("No artists match the current view");
    }
    for artist in &visible {
        let tag = session.selections().get(&artist.name);
        output.write(&output::artist_row(artist, tag, quiet));
    }

    if !quiet {
        output.info(&output::stats_line(&session.stats()));
    }
}

/// Execute the days command - print the day filter options
pub fn days(session: &Session, output: &dyn OutputWriter) {
    for day in session.catalog().available_days() {
        output.write(day);
    }
}

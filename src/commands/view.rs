//! Search, filter, tab and sort commands
//!
//! These commands only change the view state; the caller prints the
//! resulting list.

use crate::catalog::ALL;
use crate::output::OutputWriter;
use crate::view::{ActiveTab, SortKey};
use crate::{Result, Session};

/// Execute the search command - set or clear the name query
pub fn search(session: &mut Session, query: Option<String>, output: &dyn OutputWriter) {
    let query = query.unwrap_or_default();
    if query.is_empty() {
        output.info("Search cleared");
    } else {
        output.info(&format!("Searching for \"{query}\""));
    }
    session.set_query(query);
}

/// Execute the filter command - set category and day filters
///
/// # Errors
///
/// Returns `LineupError::InvalidInput` for an unknown category or day.
pub fn filter(
    session: &mut Session,
    category: Option<&str>,
    day: Option<&str>,
    clear: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    if clear {
        session.set_query("");
        session.set_category(ALL)?;
        session.set_day(ALL)?;
        output.info("Filters cleared");
        return Ok(());
    }

    if let Some(category) = category {
        session.set_category(category)?;
    }
    if let Some(day) = day {
        session.set_day(day)?;
    }

    let view = session.view();
    output.info(&format!("Category: {}, day: {}", view.category, view.day));
    Ok(())
}

/// Execute the tab command
pub fn tab(session: &mut Session, tab: ActiveTab, output: &dyn OutputWriter) {
    session.set_active_tab(tab);
    output.info(&format!("Showing tab: {tab}"));
}

/// Execute the sort command - sort by `key`, flipping direction on repeat
pub fn sort(session: &mut Session, key: SortKey, output: &dyn OutputWriter) {
    session.toggle_sort(key);
    let view = session.view();
    output.info(&format!(
        "Sorted by {} {}",
        view.sort_key,
        view.sort_direction.arrow()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineupError;
    use crate::output::BufferWriter;
    use crate::selection::SelectionTag;
    use crate::store::MemoryRepository;
    use crate::testing::sample_catalog;
    use crate::view::SortDirection;

    fn session() -> Session {
        Session::builder()
            .repository(MemoryRepository::new())
            .catalog(sample_catalog())
            .build()
            .unwrap()
    }

    #[test]
    fn test_search_sets_and_clears() {
        let mut session = session();
        let output = BufferWriter::new();

        search(&mut session, Some("jus".into()), &output);
        assert_eq!(session.view().query, "jus");

        search(&mut session, None, &output);
        assert_eq!(session.view().query, "");
    }

    #[test]
    fn test_filter_and_clear() {
        let mut session = session();
        let output = BufferWriter::new();

        filter(&mut session, Some("Featured Artists"), None, false, &output).unwrap();
        assert_eq!(session.view().category, "Featured Artists");
        assert_eq!(session.visible().len(), 1);

        session.set_query("car");
        filter(&mut session, None, None, true, &output).unwrap();
        assert!(!session.view().is_filtered());
    }

    #[test]
    fn test_filter_rejects_unknown_day() {
        let mut session = session();
        let err = filter(&mut session, None, Some("Caturday"), false, &BufferWriter::new()).unwrap_err();
        assert!(matches!(err, LineupError::InvalidInput(_)));
        assert_eq!(session.view().day, "All");
    }

    #[test]
    fn test_tab() {
        let mut session = session();
        tab(
            &mut session,
            ActiveTab::Tagged(SelectionTag::PassingBreeze),
            &BufferWriter::new(),
        );
        assert!(session.visible().is_empty());
    }

    #[test]
    fn test_sort_twice_flips() {
        let mut session = session();
        let output = BufferWriter::new();
        sort(&mut session, SortKey::Name, &output);
        sort(&mut session, SortKey::Name, &output);
        assert_eq!(session.view().sort_key, SortKey::Name);
        assert_eq!(session.view().sort_direction, SortDirection::Desc);
        assert_eq!(output.messages().len(), 2);
    }
}

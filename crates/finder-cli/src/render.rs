//! Plain-text rendering of the search widget.

use std::fmt;

use finder_core::{PageMarker, SearchController};

/// Line shown while a fetch is outstanding.
pub const LOADING_LINE: &str = "Loading...";

/// Interactive prompt help.
pub const HELP_TEXT: &str = "\
Commands:
  search <city>   Search companies by city (alias: s)
  search          Search the last typed city again
  page <n>        Jump to page n of the current search
  next            Next page (alias: n)
  prev            Previous page (alias: p)
  clear           Reset the search
  help            Show this help
  quit            Exit (alias: exit)";

/// Render the full widget for the controller's current state.
///
/// Before any search this is empty.
pub fn render_state(controller: &SearchController) -> String {
    StateView(controller).to_string()
}

/// [`fmt::Display`] view of the widget.
pub struct StateView<'a>(pub &'a SearchController);

impl fmt::Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller = self.0;
        let state = controller.state();

        if state.loading {
            writeln!(f, "{LOADING_LINE}")?;
        }

        if controller.is_empty_result() {
            return writeln!(f, "No companies found in city \"{}\"", state.committed_term);
        }

        for company in &state.results {
            writeln!(f, "{} – {}", company.display_name(), company.display_city())?;
        }

        if state.total > 0 {
            if state.results.is_empty() && !state.loading {
                writeln!(f, "No companies on this page")?;
            }
            writeln!(
                f,
                "Page {} of {} ({} companies)",
                state.page,
                controller.total_pages(),
                state.total
            )?;
        }

        let markers = controller.markers();
        if !markers.is_empty() {
            writeln!(f, "{}", render_strip(&markers, state.page))?;
        }

        Ok(())
    }
}

/// Join `markers` with spaces, bracketing the `current` page.
pub fn render_strip(markers: &[PageMarker], current: u32) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(p) if *p == current => format!("[{p}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

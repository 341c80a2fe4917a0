pub mod handler;
pub mod match_detail;
pub mod names;
pub mod results;

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Selector};

pub use handler::ClickHandlerParser;
pub use match_detail::parse_match_detail;
pub use names::{RosterNameCleaner, normalize_query, title_case};
pub use results::{find_team_matches, row_matches_team};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {}", css, e))
}

/// Direct element children, skipping text and comment nodes
pub(crate) fn element_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

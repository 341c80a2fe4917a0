use anyhow::{Result, bail};
use log::debug;
use scraper::{ElementRef, Html};

use super::{ClickHandlerParser, element_children, selector, text_of};
use crate::domain::MatchReference;

const RESULTS_TABLE: &str = "body > table > tbody > tr > td > table";

/// Collect the fixtures in the results table that involve `team`.
///
/// `team` must already be normalized (trimmed, lowercase). Rows whose first
/// cell has no usable click handler are skipped.
pub fn find_team_matches(
    html: &Html,
    team: &str,
    handler_parser: &ClickHandlerParser,
) -> Result<Vec<MatchReference>> {
    let rows = results_rows(html)?;
    debug!("Results table has {} rows", rows.len());

    let references = rows
        .into_iter()
        .map(element_children)
        .filter(|cells| row_matches_team(cells, team))
        .filter_map(|cells| match_reference(&cells, handler_parser))
        .collect();

    Ok(references)
}

/// True when the first or last cell names `team` exactly
pub fn row_matches_team(cells: &[ElementRef<'_>], team: &str) -> bool {
    let names_team = |cell: &ElementRef<'_>| text_of(*cell).trim().to_lowercase() == team;
    cells.first().is_some_and(names_team) || cells.last().is_some_and(names_team)
}

fn results_rows(html: &Html) -> Result<Vec<ElementRef<'_>>> {
    let table_selector = selector(RESULTS_TABLE)?;
    let Some(table) = html.select(&table_selector).next() else {
        bail!("Results table not found; is this a TROLS results page?");
    };

    let rows = element_children(table)
        .into_iter()
        .next()
        .map(element_children)
        .unwrap_or_default();

    Ok(rows)
}

fn match_reference(
    cells: &[ElementRef<'_>],
    handler_parser: &ClickHandlerParser,
) -> Option<MatchReference> {
    let anchor = cells.first().copied().and_then(|cell| element_children(cell).into_iter().next())?;

    let handler = anchor
        .value()
        .attr("onclick")
        .map(str::trim)
        .filter(|h| !h.is_empty());

    let Some(handler) = handler else {
        debug!("Skipping row without a click handler");
        return None;
    };

    let reference = handler_parser.parse(handler);
    if reference.is_none() {
        debug!("Skipping row with unreadable click handler: {}", handler);
    }
    reference
}

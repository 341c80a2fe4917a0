use anyhow::{Result, bail};
use log::debug;
use scraper::{ElementRef, Html};

use super::{RosterNameCleaner, element_children, selector, text_of};
use crate::domain::{MatchDetail, SetRow};

/// The popup's score sheet is the second `.xs` table on the page
const DETAIL_TABLE_INDEX: usize = 1;

/// Parse a `match_popup.php` document.
///
/// The score sheet's second row holds three cells: the home roster,
/// the set lines, and the away roster.
pub fn parse_match_detail(html: &Html) -> Result<MatchDetail> {
    let table_selector = selector(".xs")?;
    let Some(table) = html.select(&table_selector).nth(DETAIL_TABLE_INDEX) else {
        bail!("Score sheet table not found in match popup");
    };

    let columns = main_columns(table)?;
    let row_selector = selector("tr")?;
    let cleaner = RosterNameCleaner::new()?;

    let home_roster = columns[0]
        .select(&row_selector)
        .filter_map(|row| roster_name(row, &cleaner))
        .collect();
    let away_roster = columns[2]
        .select(&row_selector)
        .filter_map(|row| roster_name(row, &cleaner))
        .collect();
    let sets = columns[1].select(&row_selector).filter_map(set_row).collect();

    Ok(MatchDetail {
        home_roster,
        away_roster,
        sets,
    })
}

fn main_columns(table: ElementRef<'_>) -> Result<Vec<ElementRef<'_>>> {
    let body = element_children(table).into_iter().next();
    let main = body.and_then(|body| element_children(body).into_iter().nth(1));

    let Some(main) = main else {
        bail!("Score sheet has no roster row");
    };

    let columns = element_children(main);
    if columns.len() < 3 {
        bail!("Score sheet row has {} columns, expected 3", columns.len());
    }
    Ok(columns)
}

/// Roster rows are `[number, name]`; the name sits in the second cell
fn roster_name(row: ElementRef<'_>, cleaner: &RosterNameCleaner) -> Option<String> {
    let cells = element_children(row);
    let Some(cell) = cells.get(1) else {
        debug!("Skipping roster row without a name cell");
        return None;
    };
    Some(cleaner.clean(&text_of(*cell)))
}

fn set_row(row: ElementRef<'_>) -> Option<SetRow> {
    let cells: Vec<String> = element_children(row)
        .into_iter()
        .map(|cell| text_of(cell).trim().to_string())
        .collect();

    match cells.as_slice() {
        [home, score, away, ..] => Some(SetRow::new(home.as_str(), score.as_str(), away.as_str())),
        _ => {
            debug!("Skipping set row with {} cells", cells.len());
            None
        }
    }
}

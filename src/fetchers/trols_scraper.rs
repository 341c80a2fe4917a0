use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::Url;
use scraper::Html;
use std::path::Path;

use super::DocumentSource;
use crate::domain::{MatchDetail, MatchReference};
use crate::errors::{fetch_context, parse_context};
use crate::parsers::{ClickHandlerParser, find_team_matches, parse_match_detail};

/// Scraper for the TROLS results page and its match popups
pub struct TrolsScraper<S> {
    source: S,
    handler_parser: ClickHandlerParser,
}

impl<S: DocumentSource> TrolsScraper<S> {
    pub fn new(source: S) -> Result<Self> {
        let handler_parser = ClickHandlerParser::new()?;
        Ok(Self {
            source,
            handler_parser,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the results page, from disk when a saved copy is given
    pub async fn load_results_page(&self, url: &Url, saved_copy: Option<&Path>) -> Result<String> {
        match saved_copy {
            Some(path) => {
                info!("Reading results page from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read results page: {}", path.display()))
            }
            None => {
                info!("Fetching results page {}", url);
                self.source
                    .fetch(url.clone())
                    .await
                    .with_context(|| fetch_context(url.as_str()))
            }
        }
    }

    /// Fixtures in the results page that involve `team` (normalized)
    pub fn team_matches(&self, results_page: &str, team: &str) -> Result<Vec<MatchReference>> {
        let html = Html::parse_document(results_page);
        find_team_matches(&html, team, &self.handler_parser)
            .with_context(|| parse_context("results page"))
    }
}

/// Load and parse one match popup, resolved relative to the results page
pub async fn fetch_match_detail<S: DocumentSource>(
    source: &S,
    results_url: &Url,
    reference: &MatchReference,
) -> Result<MatchDetail> {
    let url = results_url
        .join(&reference.popup_path())
        .with_context(|| format!("Failed to build popup URL for {}", reference))?;

    debug!("Loading match popup {}", url);
    let page = source
        .fetch(url.clone())
        .await
        .with_context(|| fetch_context(url.as_str()))?;

    parse_match_detail(&Html::parse_document(&page))
        .with_context(|| parse_context(&format!("match popup for {}", reference)))
}

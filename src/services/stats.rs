use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use reqwest::Url;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;

use crate::config::AppConfig;
use crate::config::site::is_known_results_page;
use crate::domain::{MatchReference, MatchTally, PlayerRecord, fold_tallies, tally_match};
use crate::errors::MatchFailure;
use crate::fetchers::{DocumentSource, TrolsScraper, fetch_match_detail};
use crate::input::{Prompter, StatsQuery, capture_query};

/// What to look up and where
pub struct StatsRequest {
    pub results_url: Url,
    /// Saved copy of the results page; popups are still fetched from `results_url`.
    pub results_file: Option<PathBuf>,
    pub team: Option<String>,
    pub player: Option<String>,
    pub check_site: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub record: PlayerRecord,
    /// Fixtures of the team that had a readable match link
    pub matches_considered: usize,
    /// Fixtures where the player took part in at least one set
    pub matches_played: usize,
    pub failures: Vec<MatchFailure>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The URL is not a known results page
    WrongPage,
    /// No team or player was given
    NothingToDo,
    Completed(StatsReport),
}

pub struct StatsService<S> {
    config: AppConfig,
    scraper: TrolsScraper<S>,
}

impl<S: DocumentSource> StatsService<S> {
    pub fn new(source: S, config: AppConfig) -> Result<Self> {
        Ok(Self {
            config,
            scraper: TrolsScraper::new(source)?,
        })
    }

    pub async fn run<P: Prompter>(&self, request: StatsRequest, prompter: &mut P) -> Result<RunOutcome> {
        if request.check_site && !is_known_results_page(&request.results_url) {
            warn!(
                "Refusing to run on {}: not a TROLS results page",
                request.results_url
            );
            return Ok(RunOutcome::WrongPage);
        }

        let Some(query) = capture_query(request.team, request.player, prompter)? else {
            info!("No team or player given, nothing to do");
            return Ok(RunOutcome::NothingToDo);
        };

        let report = self
            .collect_stats(&request.results_url, request.results_file.as_deref(), &query)
            .await?;
        Ok(RunOutcome::Completed(report))
    }

    async fn collect_stats(
        &self,
        results_url: &Url,
        results_file: Option<&std::path::Path>,
        query: &StatsQuery,
    ) -> Result<StatsReport> {
        info!("=== Collecting stats for {} ({}) ===", query.player_display(), query.team_display());

        let results_page = self.scraper.load_results_page(results_url, results_file).await?;
        let references = self.scraper.team_matches(&results_page, &query.team)?;
        info!("  → Found {} matches for {}", references.len(), query.team_display());

        let matches_considered = references.len();
        let (tallies, failures) = self.tally_matches(results_url, references, query).await;

        let matches_played = tallies.iter().filter(|t| !t.is_empty()).count();
        let record = fold_tallies(
            PlayerRecord::new(query.player_display(), query.team_display()),
            tallies,
        );

        info!(
            "  → Player took part in {} of {} matches ({} failed)",
            matches_played,
            matches_considered,
            failures.len()
        );

        Ok(StatsReport {
            record,
            matches_considered,
            matches_played,
            failures,
            generated_at: Utc::now(),
        })
    }

    /// Load every match concurrently and wait for all of them.
    ///
    /// Each task returns its own tally; a failed match is reported and
    /// leaves the others untouched.
    async fn tally_matches(
        &self,
        results_url: &Url,
        references: Vec<MatchReference>,
        query: &StatsQuery,
    ) -> (Vec<MatchTally>, Vec<MatchFailure>) {
        let limiter = self
            .config
            .scraper
            .max_concurrent
            .map(|permits| Arc::new(Semaphore::new(permits)));

        let mut tasks = JoinSet::new();
        let mut pending = HashMap::new();

        for (index, reference) in references.into_iter().enumerate() {
            let source = self.scraper.source().clone();
            let results_url = results_url.clone();
            let player = query.player.clone();
            let winning_score = self.config.tally.winning_score.clone();
            let limiter = limiter.clone();
            let task_reference = reference.clone();

            let handle = tasks.spawn(async move {
                let _permit = acquire(limiter).await;
                fetch_match_detail(&source, &results_url, &task_reference)
                    .await
                    .map(|detail| tally_match(&detail, &player, &winning_score))
            });
            pending.insert(handle.id(), (index, reference));
        }

        let mut tallies = Vec::new();
        let mut failures = Vec::new();

        while let Some(joined) = tasks.join_next_with_id().await {
            let (id, outcome) = match joined {
                Ok((id, outcome)) => (id, outcome),
                Err(e) => {
                    error!("Match task did not finish: {}", e);
                    (e.id(), Err(anyhow!("Match task did not finish: {}", e)))
                }
            };

            let Some((index, reference)) = pending.remove(&id) else {
                continue;
            };

            match outcome {
                Ok(tally) => tallies.push(tally),
                Err(e) => {
                    warn!("Skipping {}: {:#}", reference, e);
                    failures.push((index, MatchFailure::new(reference, &e)));
                }
            }
        }

        // Report failures in the order the matches appear on the results page
        failures.sort_by_key(|(index, _)| *index);
        let failures = failures.into_iter().map(|(_, failure)| failure).collect();
        (tallies, failures)
    }
}

async fn acquire(limiter: Option<Arc<Semaphore>>) -> Option<OwnedSemaphorePermit> {
    match limiter {
        Some(semaphore) => semaphore.acquire_owned().await.ok(),
        None => None,
    }
}

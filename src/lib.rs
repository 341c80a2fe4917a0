pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod input;
pub mod parsers;
pub mod render;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use reqwest::Url;

use crate::cli::{Command, StatsArgs};
use crate::config::AppConfig;
use crate::http::HttpClient;
use crate::input::StdinPrompter;
use crate::services::{StatsRequest, StatsService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_stats(args: &StatsArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_max_concurrent(args.max_concurrent);
        let client = HttpClient::new(&config.scraper.user_agent, config.scraper.timeout_secs)?;
        let service = StatsService::new(client, config)?;

        let request = build_request(args)?;
        let outcome = service.run(request, &mut StdinPrompter).await?;
        render::print_outcome(&outcome, args.json)
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_request(args: &StatsArgs) -> Result<StatsRequest> {
    let results_url = Url::parse(&args.url)
        .with_context(|| format!("Invalid results URL: {}", args.url))?;

    Ok(StatsRequest {
        results_url,
        results_file: args.results_file.clone(),
        team: args.team.clone(),
        player: args.player.clone(),
        check_site: !args.skip_site_check,
    })
}

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

pub const DEFAULT_RESULTS_URL: &str = "https://trols.org.au/nejta/results.php";

#[derive(Parser, Debug)]
#[command(author, version, about = "Singles and doubles records from TROLS results")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Tally a player's wins and losses from the team's matches
    Stats(StatsArgs),
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct StatsArgs {
    /// Results page to scan
    #[arg(short, long, default_value = DEFAULT_RESULTS_URL)]
    pub url: String,

    /// Club/team name (prompted for when missing)
    #[arg(short, long)]
    pub team: Option<String>,

    /// Player name (prompted for when missing)
    #[arg(short, long)]
    pub player: Option<String>,

    /// Read the results page from a saved file; popups still load from --url
    #[arg(long)]
    pub results_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Limit the number of match popups loaded at once
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Run against pages other than the TROLS results pages
    #[arg(long)]
    pub skip_site_check: bool,
}

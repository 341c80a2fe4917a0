use anyhow::Result;

use trols_player_stats::cli::Command;
use trols_player_stats::{handle_completions, handle_stats, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats(args) => handle_stats(args),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

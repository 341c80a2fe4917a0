use anyhow::{Context, Result};
use colored::Colorize;

use crate::domain::WinLoss;
use crate::services::{RunOutcome, StatsReport};

/// Plain-text summary of a player's record
pub fn render_text(report: &StatsReport) -> String {
    let record = &report.record;
    let mut out = String::new();

    let title = format!("Player: {}", record.name);
    out.push_str(&format!("{}\n", title.as_str().bold()));
    out.push_str(&format!("Team: {}\n", record.team));
    push_section(&mut out, "Singles", &record.singles);
    push_section(&mut out, "Doubles", &record.doubles);
    out
}

fn push_section(out: &mut String, title: &str, counts: &WinLoss) {
    out.push_str(&format!("\n{}\n", title.underline()));
    out.push_str(&format!("Wins: {}\n", counts.wins));
    out.push_str(&format!("Losses: {}\n", counts.losses));
}

pub fn render_json(report: &StatsReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize stats report")
}

/// Print a finished run; the other outcomes print nothing
pub fn print_outcome(outcome: &RunOutcome, as_json: bool) -> Result<()> {
    let RunOutcome::Completed(report) = outcome else {
        return Ok(());
    };

    for failure in &report.failures {
        eprintln!("{} {}", "warning:".yellow().bold(), failure);
    }

    if as_json {
        println!("{}", render_json(report)?);
    } else {
        print!("{}", render_text(report));
    }
    Ok(())
}

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::parsers::{normalize_query, title_case};

pub const TEAM_PROMPT: &str = "Enter the club/team to get stats for:";
pub const PLAYER_PROMPT: &str = "Enter the name of the player to get stats for:";

/// Asks the user for a value; `None` means the prompt was cancelled.
pub trait Prompter {
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Prompts on stderr and reads one line from stdin
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{} ", question).context("Failed to write prompt")?;
        stderr.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        Ok((read > 0).then_some(line))
    }
}

/// Normalized team and player names to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    /// Lowercased team name, compared against results cells
    pub team: String,
    /// Lowercased player name, compared against roster names
    pub player: String,
}

impl StatsQuery {
    pub fn team_display(&self) -> String {
        title_case(&self.team)
    }

    pub fn player_display(&self) -> String {
        title_case(&self.player)
    }
}

/// Build the query from flags, prompting for anything missing.
///
/// Returns `Ok(None)` when either name is empty or the prompt is cancelled;
/// that is a run with nothing to do, not an error.
pub fn capture_query<P: Prompter>(
    team: Option<String>,
    player: Option<String>,
    prompter: &mut P,
) -> Result<Option<StatsQuery>> {
    let Some(team) = capture_value(team, TEAM_PROMPT, prompter)? else {
        return Ok(None);
    };
    let Some(player) = capture_value(player, PLAYER_PROMPT, prompter)? else {
        return Ok(None);
    };
    Ok(Some(StatsQuery { team, player }))
}

fn capture_value<P: Prompter>(
    given: Option<String>,
    question: &str,
    prompter: &mut P,
) -> Result<Option<String>> {
    let raw = match given {
        Some(value) => Some(value),
        None => prompter.ask(question)?,
    };
    Ok(raw.map(|v| normalize_query(&v)).filter(|v| !v.is_empty()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records the questions asked
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        pub answers: VecDeque<Option<String>>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &str) -> Result<Option<String>> {
            self.asked.push(question.to_string());
            Ok(self.answers.pop_front().flatten())
        }
    }

    #[test]
    fn test_flags_skip_prompts() {
        let mut prompter = ScriptedPrompter::default();
        let query = capture_query(
            Some(" Bundoora PARK ".into()),
            Some("jane doe".into()),
            &mut prompter,
        )
        .unwrap()
        .unwrap();

        assert_eq!(query.team, "bundoora park");
        assert_eq!(query.player, "jane doe");
        assert_eq!(query.team_display(), "Bundoora Park");
        assert_eq!(query.player_display(), "Jane Doe");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_prompts_for_missing_values() {
        let mut prompter = ScriptedPrompter::new(&[Some("Rosanna\n"), Some("Eve Tan\n")]);
        let query = capture_query(None, None, &mut prompter).unwrap().unwrap();

        assert_eq!(query.team, "rosanna");
        assert_eq!(query.player, "eve tan");
        assert_eq!(prompter.asked, vec![TEAM_PROMPT, PLAYER_PROMPT]);
    }

    #[test]
    fn test_empty_team_is_nothing_to_do() {
        let mut prompter = ScriptedPrompter::new(&[Some("   \n")]);
        assert!(capture_query(None, None, &mut prompter).unwrap().is_none());
        // The player is never asked for.
        assert_eq!(prompter.asked.len(), 1);
    }

    #[test]
    fn test_cancelled_player_prompt_is_nothing_to_do() {
        let mut prompter = ScriptedPrompter::new(&[None]);
        let query = capture_query(Some("Rosanna".into()), None, &mut prompter).unwrap();
        assert!(query.is_none());
    }
}

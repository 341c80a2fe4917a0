use anyhow::{Context, Result};
use regex::Regex;

/// Trim and lowercase a team or player name for comparison
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Uppercase the first character of every space-separated token.
///
/// The rest of each token is kept as is, so `"o'brien team"` becomes `"O'brien Team"`.
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips roster numbering (`"3. Jane Doe "` -> `"jane doe"`).
///
/// Leading digits are only dropped when followed by a dot.
pub struct RosterNameCleaner {
    numbering_regex: Regex,
}

impl RosterNameCleaner {
    pub fn new() -> Result<Self> {
        let numbering_regex = Self::compile_regex()?;
        Ok(Self { numbering_regex })
    }

    pub fn clean(&self, raw: &str) -> String {
        self.numbering_regex
            .replace(raw, "")
            .trim_end()
            .to_lowercase()
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^\s*(?:\d*\.\s*)?").context("Failed to compile roster numbering regex")
    }
}

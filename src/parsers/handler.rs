use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::MatchReference;

/// Reads fixture IDs out of a results row's `onclick` source.
///
/// The site renders handlers like `open_match('57','1234')`: the first two
/// single-quoted fields are the season ID and the match ID, in that order.
pub struct ClickHandlerParser {
    ids_regex: Regex,
}

impl ClickHandlerParser {
    pub fn new() -> Result<Self> {
        let ids_regex = Self::compile_regex()?;
        Ok(Self { ids_regex })
    }

    pub fn parse(&self, handler: &str) -> Option<MatchReference> {
        let captures = self.ids_regex.captures(handler)?;
        let season_id = captures.get(1)?.as_str();
        let match_id = captures.get(2)?.as_str();
        Some(MatchReference::new(season_id, match_id))
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"'([^']*)'[^']*'([^']*)'").context("Failed to compile click handler regex")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_season_and_match() {
        let parser = ClickHandlerParser::new().unwrap();
        let reference = parser.parse("open_match('57','1234'); return false;").unwrap();
        assert_eq!(reference, MatchReference::new("57", "1234"));
    }

    #[test]
    fn test_ignores_extra_fields() {
        let parser = ClickHandlerParser::new().unwrap();
        let reference = parser
            .parse("function onclick(event) {\npopup('9', '88', 'x');\n}")
            .unwrap();
        assert_eq!(reference, MatchReference::new("9", "88"));
    }

    #[test]
    fn test_needs_two_quoted_fields() {
        let parser = ClickHandlerParser::new().unwrap();
        assert!(parser.parse("open_match('57')").is_none());
        assert!(parser.parse("open_match(57, 1234)").is_none());
        assert!(parser.parse("").is_none());
    }
}

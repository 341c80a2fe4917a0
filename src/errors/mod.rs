use serde::Serialize;

use crate::domain::MatchReference;

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// A match whose popup could not be loaded or read.
///
/// Failures are kept per match so the other fixtures still count.
#[derive(Debug, Clone, Serialize)]
pub struct MatchFailure {
    pub reference: MatchReference,
    pub message: String,
}

impl MatchFailure {
    pub fn new(reference: MatchReference, error: &anyhow::Error) -> Self {
        Self {
            reference,
            message: format!("{:#}", error),
        }
    }
}

impl std::fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.reference, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_failure_keeps_context_chain() {
        let error = Err::<(), _>(anyhow::anyhow!("HTTP error: 500"))
            .context(fetch_context("match_popup.php"))
            .unwrap_err();
        let failure = MatchFailure::new(MatchReference::new("1", "2"), &error);

        assert_eq!(
            failure.to_string(),
            "season 1 match 2: Failed to fetch from: match_popup.php: HTTP error: 500"
        );
    }
}

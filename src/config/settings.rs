use log::{debug, warn};

pub struct ScraperSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Upper bound on in-flight match popups; `None` fetches them all at once.
    pub max_concurrent: Option<usize>,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: "TrolsPlayerStats/1.0".to_string(),
            timeout_secs: 30,
            max_concurrent: None,
        }
    }
}

pub struct TallySettings {
    /// Games a side must reach to take the set.
    pub winning_score: String,
}

impl Default for TallySettings {
    fn default() -> Self {
        Self {
            winning_score: "6".to_string(),
        }
    }
}

pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub tally: TallySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            tally: TallySettings::default(),
        }
    }

    /// Defaults overridden by `TROLS_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(agent) = lookup("TROLS_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            debug!("Using user agent from environment: {}", agent);
            self.scraper.user_agent = agent;
        }

        if let Some(raw) = lookup("TROLS_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.scraper.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid TROLS_TIMEOUT_SECS: {}", raw),
            }
        }

        if let Some(score) = lookup("TROLS_WINNING_SCORE").filter(|v| !v.trim().is_empty()) {
            self.tally.winning_score = score.trim().to_string();
        }
    }

    pub fn with_max_concurrent(mut self, max: Option<usize>) -> Self {
        self.scraper.max_concurrent = max.filter(|&n| n > 0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.tally.winning_score, "6");
        assert_eq!(config.scraper.timeout_secs, 30);
        assert!(config.scraper.max_concurrent.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::new();
        config.apply_overrides(lookup_from(&[
            ("TROLS_USER_AGENT", "Custom/2.0"),
            ("TROLS_TIMEOUT_SECS", "5"),
            ("TROLS_WINNING_SCORE", " 4 "),
        ]));

        assert_eq!(config.scraper.user_agent, "Custom/2.0");
        assert_eq!(config.scraper.timeout_secs, 5);
        assert_eq!(config.tally.winning_score, "4");
    }

    #[test]
    fn test_invalid_timeout_is_ignored() {
        let mut config = AppConfig::new();
        config.apply_overrides(lookup_from(&[("TROLS_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.scraper.timeout_secs, 30);
    }

    #[test]
    fn test_zero_concurrency_means_unbounded() {
        let config = AppConfig::new().with_max_concurrent(Some(0));
        assert!(config.scraper.max_concurrent.is_none());

        let config = AppConfig::new().with_max_concurrent(Some(4));
        assert_eq!(config.scraper.max_concurrent, Some(4));
    }
}

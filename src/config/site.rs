use reqwest::Url;

/// Results pages the scraper knows how to read
///
/// TROLS serves the same nested-table layout from two pages:
/// the club results (`results.php`) and the player results (`p_results.php`).
#[derive(Debug, Clone)]
pub struct KnownSite {
    pub host: &'static str,
    pub paths: &'static [&'static str],
}

impl KnownSite {
    pub fn new(host: &'static str, paths: &'static [&'static str]) -> Self {
        Self { host, paths }
    }

    pub fn matches(&self, url: &Url) -> bool {
        url.host_str().is_some_and(|host| host.eq_ignore_ascii_case(self.host))
            && self.paths.contains(&url.path())
    }
}

/// Get the results pages accepted by the site guard
pub fn known_sites() -> Vec<KnownSite> {
    vec![KnownSite::new(
        "trols.org.au",
        &["/nejta/results.php", "/nejta/p_results.php"],
    )]
}

/// True when `url` points at one of the known results pages
pub fn is_known_results_page(url: &Url) -> bool {
    known_sites().iter().any(|site| site.matches(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_accepts_both_results_pages() {
        assert!(is_known_results_page(&url("https://trols.org.au/nejta/results.php")));
        assert!(is_known_results_page(&url(
            "https://trols.org.au/nejta/p_results.php?daytime=A"
        )));
    }

    #[test]
    fn test_rejects_other_pages() {
        assert!(!is_known_results_page(&url("https://trols.org.au/nejta/index.php")));
        assert!(!is_known_results_page(&url("https://example.com/nejta/results.php")));
        assert!(!is_known_results_page(&url("https://trols.org.au/other/results.php")));
    }
}

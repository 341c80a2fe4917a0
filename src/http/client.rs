use anyhow::{Context, Result, bail};
use reqwest::{Client, Url};
use std::time::Duration;

/// HTTP client for TROLS pages
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body, failing on non-success statuses
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        let response = self.send_get_request(url).await?;
        Self::check_response_status(&response)?;
        response.text().await.context("Failed to read response body")
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &Url) -> Result<reqwest::Response> {
        self.client
            .get(url.clone())
            .send()
            .await
            .context("Failed to send GET request")
    }

    fn check_response_status(response: &reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            bail!("HTTP error: {}", response.status());
        }
        Ok(())
    }
}

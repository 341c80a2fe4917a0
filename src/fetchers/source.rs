use anyhow::Result;
use reqwest::Url;
use std::future::Future;

use crate::http::HttpClient;

/// Where HTML documents come from
///
/// Sources are cloned into each match task, so clones should be cheap.
pub trait DocumentSource: Clone + Send + Sync + 'static {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<String>> + Send;
}

impl DocumentSource for HttpClient {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<String>> + Send {
        let client = self.clone();
        async move { client.get_text(&url).await }
    }
}

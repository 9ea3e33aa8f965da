//! Page retrieval over HTTP.
//!
//! The [`Fetch`] trait is the seam between the conversation engine and the
//! network; [`HttpFetcher`] is the real implementation. Any transport
//! failure or non-success status folds into [`FetchError`] — no retries,
//! no partial content.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Client signature sent with every request. Some sites answer bots with
/// error statuses or captchas, so we identify as a plain browser.
pub const USER_AGENT: &str = "Mozilla/5.0 Chrome/91.0.4472.124 Safari/537.36";

/// Default fetch timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// A failed page retrieval. Terminal for the turn that triggered it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

/// Retrieve raw markup for a URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher with a browser User-Agent and a bounded per-request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

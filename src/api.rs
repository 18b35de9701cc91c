//! Access to the news backend.
//!
//! The backend serves the whole digest from a single endpoint, `GET /api/news`,
//! as a JSON array of [`NewsItem`]. This module defines:
//!
//! - [`NewsSource`]: the seam the view controller fetches through
//! - [`HttpNewsSource`]: the real implementation over `reqwest`
//! - [`FetchFailure`]: the one error kind a fetch can produce
//!
//! There is no retry, polling or timeout here: one activation
//! issues one request and whatever it settles to is final.

use crate::models::NewsItem;
use crate::utils::{looks_truncated, truncate_for_log};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::error::Error;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Fixed path of the digest endpoint, resolved against the configured base URL.
pub const NEWS_PATH: &str = "/api/news";

/// A failed fetch.
///
/// Network errors, bad statuses and undecodable bodies are kept apart only so
/// the log line says what happened; callers treat every variant the same way.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("malformed news payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce the full item collection.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch every item, in the order the backend returns them.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, FetchFailure>;
}

/// [`NewsSource`] backed by the HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpNewsSource {
    client: Client,
    endpoint: Url,
}

impl HttpNewsSource {
    /// Build a source for the backend at `base_url`.
    ///
    /// `/api/news` is joined as an absolute path, so any path component of
    /// `base_url` is replaced, the same way a browser resolves it against the
    /// page origin.
    pub fn new(base_url: &str) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(concat!("ai_daily_news/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(base_url, client)
    }

    /// Same as [`HttpNewsSource::new`] with a caller-built client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, Box<dyn Error>> {
        let endpoint = Url::parse(base_url)?.join(NEWS_PATH)?;
        Ok(Self { client, endpoint })
    }

    /// The resolved endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl NewsSource for HttpNewsSource {
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, FetchFailure> {
        let t0 = Instant::now();
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status {
                status,
                url: self.endpoint.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Received news payload");

        let items = serde_json::from_slice::<Vec<NewsItem>>(&body).inspect_err(|e| {
            warn!(
                error = %e,
                truncated = looks_truncated(e),
                body_preview = %truncate_for_log(&String::from_utf8_lossy(&body), 300),
                "News payload did not decode"
            );
        })?;

        info!(
            count = items.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched news items"
        );
        Ok(items)
    }
}

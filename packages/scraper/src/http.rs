//! HTTP client wrapper for downloading results pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScraperError};

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the request deadline and user agent set.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Source of raw documents.
///
/// Adapters only see this trait, so tests can substitute canned documents
/// and count requests.
pub trait Fetcher {
    /// Fetch the body at `url` as text. Non-success responses are errors.
    fn fetch_text(&self, url: &str) -> Result<String>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_text(&self, url: &str) -> Result<String> {
        (**self).fetch_text(url)
    }
}

/// Fetcher backed by a blocking `reqwest` client.
///
/// One attempt per call: failures and non-success statuses are returned
/// as-is, without retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Fetcher with a freshly configured client.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: create_client()?,
        })
    }

    /// Fetcher reusing an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "Fetching document");

        let download_error = |source| ScraperError::Download {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(download_error)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = %status, "Non-success response");
        }

        let body = response
            .error_for_status()
            .map_err(download_error)?
            .text()
            .map_err(download_error)?;

        tracing::debug!(url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}

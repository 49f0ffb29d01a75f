//! Client for the Astronomy Picture of the Day feed.

mod models;

pub use models::{FeedItem, MediaType};

use models::FeedResponse;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::gallery::DateRange;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {}", .status.as_u16())]
    Http { status: StatusCode },
    #[error("request to feed provider failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to parse feed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches feed entries for a date range.
#[derive(Debug, Clone)]
pub struct ApodClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApodClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch every entry published within `range`.
    ///
    /// A single-day range comes back from the provider as a bare object; it is
    /// returned here as a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on a non-success status, and
    /// [`FetchError::Request`] or [`FetchError::Parse`] when the request or the
    /// body fails. Nothing is retried.
    pub async fn fetch(&self, range: &DateRange) -> Result<Vec<FeedItem>, FetchError> {
        debug!(start = %range.start(), end = %range.end(), "Fetching APOD entries");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("start_date", range.start()),
                ("end_date", range.end()),
            ])
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "APOD request failed"))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, start = %range.start(), end = %range.end(), "APOD returned an error status");
            return Err(FetchError::Http { status });
        }

        let body = response.bytes().await?;
        let parsed: FeedResponse = serde_json::from_slice(&body)
            .inspect_err(|e| warn!(error = %e, "Failed to parse APOD response"))?;
        let items = parsed.into_items();

        debug!(count = items.len(), "Fetched APOD entries");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = FetchError::Http {
            status: StatusCode::TOO_MANY_REQUESTS,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 429");
    }

    #[test]
    fn test_client_builds_without_timeout() {
        let mut config = Config::for_testing();
        config.request_timeout = None;
        assert!(ApodClient::new(&config).is_ok());
    }
}

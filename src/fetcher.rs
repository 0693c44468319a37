//! HTML fetching over HTTP.
//!
//! The rest of the crate talks to the network only through the [`FetchHtml`]
//! trait, so scrapers and the run loop can be driven by an in-memory stub in
//! tests. [`HttpFetcher`] is the production implementation backed by a single
//! shared `reqwest::Client`.
//!
//! There are no retries and no timeout beyond the client defaults. A failed
//! request is reported as a [`FetchError`] and callers decide how to degrade.

use reqwest::{Client, StatusCode};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, instrument};

/// Why a page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, redirect or body decoding failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a 4xx or 5xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Anything that can turn a URL into page markup.
pub trait FetchHtml {
    /// Issue one GET for `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`FetchHtml`] over HTTP(S) with no custom headers.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl FetchHtml for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}


#[cfg(test)]
mod tests {
    use super::stub::StubFetcher;
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            url: "https://www.cbsnews.com/".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "https://www.cbsnews.com/ returned HTTP 503 Service Unavailable"
        );
    }

    #[tokio::test]
    async fn test_stub_fetcher_known_and_unknown_pages() {
        let fetcher = StubFetcher::new().with_page("https://example.com/", "<p>hi</p>");

        let body = fetcher.fetch("https://example.com/").await.unwrap();
        assert_eq!(body, "<p>hi</p>");

        let err = fetcher.fetch("https://example.com/missing").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status == StatusCode::NOT_FOUND
        ));
        assert_eq!(
            fetcher.requests(),
            vec!["https://example.com/", "https://example.com/missing"]
        );
    }

    #[tokio::test]
    async fn test_http_fetcher_connection_failure() {
        // Port 9 on loopback is the discard service; nothing listens in CI.
        let fetcher = HttpFetcher::new();
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}

// fetcher.rs
use crate::loader::FetchError;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = concat!("stays-browser/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for remote CSV files.
///
/// Runs on the request worker that asked for it; callers must not hold the
/// store lock across [`CsvFetcher::fetch_text`].
pub struct CsvFetcher {
    client: Client,
}

impl CsvFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Accept only absolute http(s) URLs.
    pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FetchError::InvalidUrl("empty".into()));
        }

        let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(FetchError::InvalidUrl(format!("unsupported scheme {other}"))),
        }
    }

    /// GET the URL and return its body. Non-2xx statuses and blank bodies are
    /// errors; a 404 comes back as [`FetchError::NotFound`].
    pub fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            warn!(%url, "remote CSV not found");
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "remote CSV request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        info!(%url, bytes = text.len(), elapsed = ?start.elapsed(), "fetched remote CSV");
        Ok(text)
    }
}

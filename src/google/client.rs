//! Shared HTTP client for the Google OAuth and Calendar APIs

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::config::GoogleConfig;

#[derive(Debug, Error)]
pub enum GoogleError {
    /// Google answered with a status the caller did not accept
    #[error("Google API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Request to Google API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected response body from Google API: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for every call the relay makes to Google. Holds a pooled
/// `reqwest::Client` and the immutable credentials it was built with.
#[derive(Clone, Debug)]
pub struct GoogleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: GoogleConfig,
}

impl GoogleClient {
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }
}

/// Read the body of `res` and decode it as JSON if `accept` allows
/// the status, otherwise return the status along with the raw body.
pub(crate) async fn decode_response<T, F>(
    res: Response,
    accept: F,
) -> Result<(StatusCode, T), GoogleError>
where
    T: DeserializeOwned,
    F: Fn(StatusCode) -> bool,
{
    let status = res.status();
    let text = res.text().await?;
    if !accept(status) {
        return Err(GoogleError::Status { status, body: text });
    }
    let body = serde_json::from_str(&text)?;
    Ok((status, body))
}

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use http::HeaderValue;

use crate::google::GoogleConfig;
use crate::google::config::{DEFAULT_API_URL, DEFAULT_TOKEN_URL};

const DEFAULT_REDIRECT_URI: &str = "http://localhost:5173/auth/callback";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// The only origin allowed to call the API from a browser
    pub frontend_origin: HeaderValue,
    pub google: GoogleConfig,
}

impl AppConfig {
    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any variable lookup. Used directly by
    /// tests so they never have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup("GOOGLE_CLIENT_ID").context("Missing env var GOOGLE_CLIENT_ID")?;
        let client_secret =
            lookup("GOOGLE_CLIENT_SECRET").context("Missing env var GOOGLE_CLIENT_SECRET")?;
        let redirect_uri =
            lookup("GOOGLE_REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());
        let token_url =
            lookup("GOOGLE_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let api_url = lookup("GOOGLE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = match lookup("RELAY_UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .with_context(|| format!("Invalid RELAY_UPSTREAM_TIMEOUT_SECS: {}", secs))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let frontend_origin =
            lookup("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string());
        let frontend_origin = HeaderValue::from_str(&frontend_origin)
            .with_context(|| format!("Invalid FRONTEND_ORIGIN: {}", frontend_origin))?;

        Ok(Self {
            frontend_origin,
            google: GoogleConfig {
                client_id,
                client_secret,
                redirect_uri,
                token_url: token_url.trim_end_matches('/').to_string(),
                api_url: api_url.trim_end_matches('/').to_string(),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

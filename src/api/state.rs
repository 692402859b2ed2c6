use crate::core::AppConfig;
use crate::google::{GoogleClient, GoogleError};

/// Everything a handler needs. Built once at startup and never
/// mutated, so it is shared across requests without a lock.
pub struct AppState {
    pub config: AppConfig,
    pub google: GoogleClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, GoogleError> {
        let google = GoogleClient::new(config.google.clone())?;
        Ok(Self { config, google })
    }
}

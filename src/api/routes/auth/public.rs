//! Public types for the OAuth API
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthCodeRequest {
    pub code: Option<String>,
}

#[derive(Deserialize)]
pub struct AuthUrlQuery {
    pub state: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body, http::HeaderValue};
use serde_json::Value;

use gcal_relay::api::AppState;
use gcal_relay::api::app;
use gcal_relay::core::AppConfig;
use gcal_relay::google::GoogleConfig;

pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Config with stub credentials and every Google endpoint pointed at
/// `server_url`, usually a `mockito` server.
pub fn test_config(server_url: &str) -> AppConfig {
    let mut google = GoogleConfig::new(
        "test_client_id",
        "test_client_secret",
        "http://localhost:5173/auth/callback",
    );
    google.token_url = format!("{}/token", server_url);
    google.api_url = server_url.to_string();

    AppConfig {
        frontend_origin: HeaderValue::from_static(FRONTEND_ORIGIN),
        google,
    }
}

/// Creates a test application router that talks to `server_url`
/// instead of Google.
pub fn test_app(server_url: &str) -> Router {
    let app_state = AppState::new(test_config(server_url)).expect("Failed to build app state");
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

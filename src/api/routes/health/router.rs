//! Router for the health check

use std::sync::Arc;

use axum::{Router, response::Json, routing::get};

use super::public::HealthResponse;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(health))
}

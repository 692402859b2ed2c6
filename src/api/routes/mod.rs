//! API routes module

pub mod auth;
pub mod calendar;
pub mod health;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // OAuth routes
        .nest("/auth/google", auth::router())
        // Calendar routes
        .nest("/calendar", calendar::router())
        // Health check
        .nest("/health", health::router())
}

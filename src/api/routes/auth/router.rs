//! Router for the OAuth API

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use axum_extra::extract::{Query, WithRejection};
use serde_json::Value;

use super::public;
use crate::api::BearerToken;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Exchange the authorization code from Google's redirect for tokens
async fn google_callback(
    State(state): State<SharedState>,
    WithRejection(Json(payload), _): WithRejection<Json<public::AuthCodeRequest>, ApiError>,
) -> Result<Json<Value>, ApiError> {
    let code = payload
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("Authorization code required".to_string()))?;

    let token = state
        .google
        .exchange_code_for_token(&code)
        .await
        .map_err(|err| {
            tracing::error!("Token exchange failed: {}", err);
            ApiError::InvalidRequest("Failed to exchange code for tokens".to_string())
        })?;

    tracing::debug!("Exchanged authorization code for tokens");
    Ok(Json(token))
}

/// Consent screen URL for the configured client
async fn google_auth_url(
    State(state): State<SharedState>,
    Query(params): Query<public::AuthUrlQuery>,
) -> Json<public::AuthUrlResponse> {
    let url = state.google.authorization_url(params.state.as_deref());
    Json(public::AuthUrlResponse { url })
}

/// Profile of the user the bearer token belongs to
async fn google_user_info(
    State(state): State<SharedState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Value>, ApiError> {
    let info = state
        .google
        .user_info(&token)
        .await
        .map_err(|err| ApiError::from_google("Failed to get user info", err))?;
    Ok(Json(info))
}

/// Create the OAuth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/callback", post(google_callback))
        .route("/url", get(google_auth_url))
        .route("/userinfo", get(google_user_info))
}

//! Router for the calendar API

use std::sync::Arc;

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::post};
use axum_extra::extract::WithRejection;
use serde_json::{Map, Value};

use super::public;
use crate::api::BearerToken;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

fn require_rfc3339(field: &str, value: &str) -> Result<(), ApiError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| ApiError::InvalidRequest(format!("{} must be an RFC3339 timestamp", field)))
}

/// Create an event in the user's primary calendar. The body is
/// forwarded without validation.
async fn create_event(
    State(state): State<SharedState>,
    BearerToken(token): BearerToken,
    WithRejection(Json(event), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (status, created) = state
        .google
        .create_event(&token, &Value::Object(event))
        .await
        .map_err(|err| ApiError::from_google("Failed to create calendar event", err))?;

    tracing::info!("Created calendar event {}", created["id"]);
    Ok((status, Json(created)))
}

/// Check whether the primary calendar is free between timeMin and timeMax
async fn free_busy(
    State(state): State<SharedState>,
    BearerToken(token): BearerToken,
    WithRejection(Json(payload), _): WithRejection<Json<public::FreeBusyRequest>, ApiError>,
) -> Result<Json<public::AvailabilityResponse>, ApiError> {
    require_rfc3339("timeMin", &payload.time_min)?;
    require_rfc3339("timeMax", &payload.time_max)?;

    let busy_periods = state
        .google
        .free_busy(&token, &payload.time_min, &payload.time_max)
        .await
        .map_err(|err| ApiError::from_google("Failed to check availability", err))?;

    Ok(Json(public::AvailabilityResponse {
        available: busy_periods.is_empty(),
        busy_periods,
    }))
}

/// Create the calendar router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/freebusy", post(free_busy))
}

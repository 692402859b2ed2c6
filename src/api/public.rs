//! Public API types

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::{Deserialize, Serialize};

use crate::google::GoogleError;

// Errors

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub enum ApiError {
    /// A required field is missing or malformed
    InvalidRequest(String),
    /// No usable `Authorization: Bearer` header
    Unauthenticated,
    /// Google answered with a status we don't accept. The status is
    /// passed through to the caller.
    Upstream { status: StatusCode, detail: String },
    /// The call to Google never produced a usable response
    BadGateway(String),
}

impl ApiError {
    /// Translate a failed Google call, prefixing the message with what
    /// the relay was trying to do.
    pub fn from_google(context: &str, err: GoogleError) -> Self {
        match err {
            GoogleError::Status { status, body } => Self::Upstream {
                status,
                detail: format!("{}: {}", context, body),
            },
            other => Self::BadGateway(format!("{}: {}", context, other)),
        }
    }

    fn status_and_detail(self) -> (StatusCode, String) {
        match self {
            Self::InvalidRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            Self::Upstream { status, detail } => (status, detail),
            Self::BadGateway(detail) => (StatusCode::BAD_GATEWAY, detail),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let unauthenticated = matches!(self, Self::Unauthenticated);
        let (status, detail) = self.status_and_detail();

        // Always log the error
        if status.is_server_error() {
            tracing::error!("{} {}", status, detail);
        } else {
            tracing::warn!("{} {}", status, detail);
        }

        let mut response = (status, Json(ErrorResponse { detail })).into_response();
        if unauthenticated {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// A body that is missing, not JSON, or missing a required field is a
/// bad request, reported in the same `{"detail": …}` shape as every
/// other error. Used through `WithRejection<Json<_>, ApiError>`.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

// Re-export public types from each route

pub mod auth {
    pub use crate::api::routes::auth::public::*;
}

pub mod calendar {
    pub use crate::api::routes::calendar::public::*;
}

pub mod health {
    pub use crate::api::routes::health::public::*;
}

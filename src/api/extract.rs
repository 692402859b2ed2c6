use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use http::request::Parts;

use super::public::ApiError;

/// Access token taken from the `Authorization: Bearer <token>` header.
/// Rejects with 401 before the body is read or anything is sent
/// upstream.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthenticated)?;

        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(ApiError::Unauthenticated);
        }
        Ok(Self(token.to_string()))
    }
}

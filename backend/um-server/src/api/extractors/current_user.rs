//! Axum extractor for the caller identity established by `require_auth`

use crate::ApiError;

use um_auth::AuthenticatedUser;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified caller. Only present on routes behind `require_auth`.
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::unauthorized("no authenticated user on request"))
    }
}

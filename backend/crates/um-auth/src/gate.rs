//! Bearer-token check performed before any protected operation.

use crate::{AuthError, AuthenticatedUser, JwtValidator, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the credential out of an `Authorization` header value
#[track_caller]
pub fn bearer_token(authorization: Option<&str>) -> AuthErrorResult<&str> {
    let header = authorization.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "bearer credential is empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}

/// Verify the bearer credential at `now` and return the caller identity.
///
/// Callers must not surface which check failed.
#[track_caller]
pub fn authorize(
    authorization: Option<&str>,
    validator: &JwtValidator,
    now: DateTime<Utc>,
) -> AuthErrorResult<AuthenticatedUser> {
    let token = bearer_token(authorization)?;
    let claims = validator.validate(token, now)?;
    AuthenticatedUser::from_claims(claims)
}

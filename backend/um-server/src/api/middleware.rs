//! Bearer-token gate for the protected routes.
//!
//! Every rejection produces the same 401 body; the specific reason only
//! reaches the log.

use crate::{ApiError, AppState};

use um_auth::authorize;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let user = authorize(header, &state.validator, Utc::now())
        .map_err(|e| ApiError::unauthorized(e.to_string()))?;

    log::debug!("Authenticated request from user {}", user.user_id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

//! Registration and sign-in handlers

use crate::{ApiResult, AppState, AuthResponse, RegisterRequest, SignInRequest};

use um_core::validation::{require, validate_email, validate_name, validate_password};

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create an account and return a session token for it
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(req) = payload?;

    validate_name(&req.name)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;

    let session = state
        .identity
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/v1/auth/signin
///
/// Exchange credentials for a session token
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;

    validate_email(&req.email)?;
    require("password", &req.password)?;

    let session = state.identity.sign_in(&req.email, &req.password).await?;

    Ok(Json(session.into()))
}

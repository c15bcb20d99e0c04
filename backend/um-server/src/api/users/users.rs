//! User REST API handlers. All routes here sit behind `require_auth`.

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, UpdateUserRequest, UserDto, UserListResponse,
    UserResponse,
};

use um_core::validation::{validate_email, validate_name};
use um_core::{ListUsersQuery, UserUpdate};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
};
use uuid::Uuid;

const MSG_FORBIDDEN: &str = "you can only update your own profile";

fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::invalid_id(id))
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users?email=&limit=&offset=
///
/// List users, newest first, optionally filtered by email substring
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> ApiResult<Json<UserListResponse>> {
    let Query(query) = query?;

    let users = state.identity.list_users(&query).await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id)?;

    let user = state.identity.get_by_id(user_id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{id}
///
/// Update the caller's own name and/or email
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id)?;

    if caller.user_id != user_id {
        return Err(ApiError::forbidden(MSG_FORBIDDEN));
    }

    let Json(req) = payload?;
    let update = UserUpdate::from(req);

    if update.is_empty() {
        return Err(ApiError::validation(
            "at least one field (name, email) must be provided",
            None,
        ));
    }
    if let Some(name) = update.name() {
        validate_name(name)?;
    }
    if let Some(email) = update.email() {
        validate_email(email)?;
    }

    let user = state.identity.update_user(user_id, update).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{register, sign_in},
        auth_response::AuthResponse,
        register_request::RegisterRequest,
        sign_in_request::SignInRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    middleware::require_auth,
    users::{
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{get_user, list_users, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;

//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a stable code. Store and crypto detail is logged, never returned.

use um_core::CoreError;
use um_identity::IdentityError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const MSG_NOT_FOUND: &str = "user not found";
pub const MSG_CONFLICT: &str = "email already in use";
pub const MSG_INVALID_CREDENTIALS: &str = "email or password is incorrect";
pub const MSG_UNAUTHORIZED: &str = "invalid or expired token";
pub const MSG_INVALID_ID: &str = "user ID must be a valid UUID";
pub const MSG_INTERNAL: &str = "internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Email already taken (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Sign-in rejected (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Missing, malformed, tampered or expired bearer token (401)
    #[error("Unauthorized: {reason} {location}")]
    Unauthorized {
        /// Logged only
        reason: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed body or query (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Path identifier is not a UUID (400)
    #[error("Invalid id: {value} {location}")]
    InvalidId {
        value: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        /// Logged only
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_id(value: impl Into<String>) -> Self {
        ApiError::InvalidId {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InvalidCredentials { .. } | ApiError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Validation { .. }
            | ApiError::BadRequest { .. }
            | ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::InvalidId { .. } => "INVALID_ID",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::BadRequest { message, .. } => (message, None),
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::InvalidCredentials { .. } => (MSG_INVALID_CREDENTIALS.to_string(), None),
            ApiError::Unauthorized { .. } => (MSG_UNAUTHORIZED.to_string(), None),
            ApiError::InvalidId { .. } => (MSG_INVALID_ID.to_string(), None),
            ApiError::Internal { .. } => (MSG_INTERNAL.to_string(), None),
        };

        let body = ApiErrorBody {
            code,
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert identity errors to API errors
impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            IdentityError::NotFound { .. } => ApiError::NotFound {
                message: MSG_NOT_FOUND.to_string(),
                location,
            },
            IdentityError::Conflict { .. } => ApiError::Conflict {
                message: MSG_CONFLICT.to_string(),
                location,
            },
            IdentityError::InvalidCredentials { .. } => ApiError::InvalidCredentials { location },
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

/// Convert input validation failures to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message().to_string(),
            field: Some(e.field().to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {key} {location}")]
    NotFound {
        entity: &'static str,
        key: String,
        location: ErrorLocation,
    },

    #[error("Uniqueness violation: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database operation '{operation}' exceeded {limit:?} {location}")]
    Timeout {
        operation: &'static str,
        limit: Duration,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Map a write failure, turning the backend's unique-constraint signal
    /// into `Conflict`.
    #[track_caller]
    pub fn from_write(source: sqlx::Error) -> Self {
        match &source {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Self::Conflict {
                message: "email already in use".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => Self::from(source),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

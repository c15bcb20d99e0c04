use um_auth::AuthError;
use um_db::DbError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("{entity} not found {location}")]
    NotFound {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            DbError::NotFound { entity, .. } => Self::NotFound { entity, location },
            DbError::Conflict { message, .. } => Self::Conflict { message, location },
            other => Self::Store {
                source: other,
                location,
            },
        }
    }
}

pub type Result<T> = StdResult<T, IdentityError>;

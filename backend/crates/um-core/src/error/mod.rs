use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }

    /// Human-readable message without the source location
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

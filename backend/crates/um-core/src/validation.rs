//! Input rules applied at the transport boundary before any identity
//! operation runs.

use crate::{CoreError, Result as CoreErrorResult};

use error_location::ErrorLocation;

use std::panic::Location;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// bcrypt ignores everything past this many bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

#[track_caller]
fn invalid(field: &'static str, message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        field,
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub fn require(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, format!("{field} is required")));
    }
    Ok(())
}

#[track_caller]
pub fn validate_name(value: &str) -> CoreErrorResult<()> {
    require("name", value)?;
    if value.chars().count() < MIN_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("name must be at least {MIN_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(value: &str) -> CoreErrorResult<()> {
    require("password", value)?;
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    if value.len() > MAX_PASSWORD_BYTES {
        return Err(invalid(
            "password",
            format!("password must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }
    Ok(())
}

/// Structural email check: one `@`, a non-empty local part and a dotted
/// domain, no whitespace.
#[track_caller]
pub fn validate_email(value: &str) -> CoreErrorResult<()> {
    require("email", value)?;

    let well_formed = !value.chars().any(char::is_whitespace)
        && match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !domain.contains("..")
            }
            None => false,
        };

    if !well_formed {
        return Err(invalid("email", "email must be a valid email address"));
    }
    Ok(())
}

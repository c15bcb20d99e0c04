mod auth_session;
mod error;
mod identity_service;

pub use auth_session::AuthSession;
pub use error::{IdentityError, Result};
pub use identity_service::{DEFAULT_LIST_LIMIT, IdentityService, MAX_LIST_LIMIT, normalize_limit};

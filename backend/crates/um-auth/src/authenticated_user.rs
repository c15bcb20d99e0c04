use crate::{Claims, Result as AuthErrorResult};

use uuid::Uuid;

/// Verified caller identity, available to a handler for the duration of
/// one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

impl AuthenticatedUser {
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        Ok(Self {
            user_id: claims.subject_id()?,
            email: claims.email,
        })
    }
}

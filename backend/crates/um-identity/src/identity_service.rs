//! Identity operations: registration, sign-in, profile read/update and
//! listing.
//!
//! The service holds only immutable collaborators, so one instance is shared
//! by every request. Email uniqueness is left entirely to the store's unique
//! index; nothing here checks before writing.

use crate::{AuthSession, IdentityError, Result as IdentityErrorResult};

use um_auth::{PasswordHasher, TokenIssuer};
use um_core::{ListUsersQuery, User, UserUpdate};
use um_db::{DbError, UserRepository};

use std::panic::Location;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_LIST_LIMIT: i64 = 20;
pub const MAX_LIST_LIMIT: i64 = 100;

/// Limits outside `(0, MAX_LIST_LIMIT]` fall back to the default
pub fn normalize_limit(limit: i64) -> i64 {
    if limit <= 0 || limit > MAX_LIST_LIMIT {
        DEFAULT_LIST_LIMIT
    } else {
        limit
    }
}

/// Current instant at the precision the store persists
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub struct IdentityService {
    repository: UserRepository,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    token_ttl: Duration,
}

impl IdentityService {
    pub fn new(
        repository: UserRepository,
        hasher: PasswordHasher,
        issuer: TokenIssuer,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            hasher,
            issuer,
            token_ttl,
        }
    }

    /// Create an account and open a session for it.
    ///
    /// A taken email surfaces as `Conflict` straight from the store.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> IdentityErrorResult<AuthSession> {
        let hasher = self.hasher;
        let plaintext = password.to_owned();
        let password_hash = run_blocking(move || hasher.hash(&plaintext)).await??;

        let user = User::new(name.to_owned(), email.to_owned(), password_hash, now());
        self.repository.create(&user).await?;

        let token = self.issue(&user)?;
        info!("User registered: {}", user.id);

        Ok(AuthSession { token, user })
    }

    /// Verify credentials and open a session.
    ///
    /// An unknown email and a wrong password both yield
    /// `InvalidCredentials`.
    pub async fn sign_in(&self, email: &str, password: &str) -> IdentityErrorResult<AuthSession> {
        let user = match self.repository.get_by_email(email).await {
            Ok(user) => user,
            Err(DbError::NotFound { .. }) => {
                warn!("Sign-in rejected");
                return Err(IdentityError::invalid_credentials());
            }
            Err(e) => return Err(e.into()),
        };

        let hasher = self.hasher;
        let plaintext = password.to_owned();
        let stored_hash = user.password_hash.clone();
        let matches = run_blocking(move || hasher.verify(&plaintext, &stored_hash)).await?;

        if !matches {
            warn!("Sign-in rejected");
            return Err(IdentityError::invalid_credentials());
        }

        let token = self.issue(&user)?;
        info!("User signed in: {}", user.id);

        Ok(AuthSession { token, user })
    }

    pub async fn get_by_id(&self, id: Uuid) -> IdentityErrorResult<User> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Apply the provided fields to an existing user and refresh
    /// `updated_at`. Returns the merged record as persisted.
    pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> IdentityErrorResult<User> {
        let mut user = self.repository.get_by_id(id).await?;

        if let Some(name) = update.name() {
            user.name = name.to_owned();
        }
        if let Some(email) = update.email() {
            user.email = email.to_owned();
        }
        user.updated_at = now();

        self.repository.update(&user).await?;
        debug!("User updated: {}", user.id);

        Ok(user)
    }

    pub async fn list_users(&self, query: &ListUsersQuery) -> IdentityErrorResult<Vec<User>> {
        let limit = normalize_limit(query.limit);
        Ok(self
            .repository
            .list(query.email_filter(), limit, query.offset)
            .await?)
    }

    #[track_caller]
    fn issue(&self, user: &User) -> IdentityErrorResult<String> {
        Ok(self
            .issuer
            .issue(user.id, &user.email, Utc::now(), self.token_ttl)?)
    }
}

/// Runs CPU-bound work (bcrypt) on the blocking pool
async fn run_blocking<T, F>(f: F) -> IdentityErrorResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| IdentityError::Internal {
            message: format!("Blocking task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

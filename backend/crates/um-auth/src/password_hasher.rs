//! One-way password hashing.
//!
//! bcrypt embeds a random salt in every hash, so hashing the same plaintext
//! twice yields different strings. Nothing here is logged.
//!
//! bcrypt only reads the first 72 bytes of its input. Both directions use
//! the non-truncating variants, so a longer plaintext fails to hash and
//! never verifies.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Longest plaintext bcrypt can hash without truncating
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password. Fails on an out-of-range cost or a
    /// plaintext longer than [`MAX_PASSWORD_BYTES`].
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::non_truncating_hash(plaintext, self.cost).map_err(|source| {
            AuthError::PasswordHash {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Check a plaintext against a stored hash. A malformed hash is a
    /// mismatch, not an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::non_truncating_verify(plaintext, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

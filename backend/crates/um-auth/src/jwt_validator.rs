use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// HMAC algorithms a token header may name. Anything else (RS*, ES*,
/// `none`) is rejected before the signature is checked.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Verifies session tokens signed with the shared secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        // Expiry is checked against the caller's clock in `validate`.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate JWT token against `now` and return claims.
    ///
    /// A token is accepted while `now < exp`. The user store is never
    /// consulted.
    #[track_caller]
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Claims> {
        if token.is_empty() {
            return Err(AuthError::InvalidToken {
                message: "token is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|source| {
                AuthError::JwtDecode {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}

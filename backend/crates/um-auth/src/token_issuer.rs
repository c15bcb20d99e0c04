use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Signs session tokens with a single symmetric secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Issue a token for `subject_id` valid over `[now, now + ttl)`.
    ///
    /// Timestamps are whole Unix seconds, so `now` is truncated to the second
    /// first and the window is really `[floor(now), floor(now) + ttl)`. A
    /// `ttl` that pushes expiry past the representable date range is an
    /// error.
    #[track_caller]
    pub fn issue(
        &self,
        subject_id: Uuid,
        subject_email: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        let issued_at = now.trunc_subsecs(0);
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: format!(
                    "token lifetime of {}s overflows the date range",
                    ttl.num_seconds()
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims = Claims {
            sub: subject_id.to_string(),
            email: subject_email.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|source| AuthError::Signing {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_TTL_SECS, MAX_BCRYPT_COST,
    MAX_TOKEN_TTL_SECS, MIN_BCRYPT_COST, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required.
    pub jwt_secret: Option<String>,
    /// Session token lifetime
    pub token_ttl_secs: i64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

// Hand-written so the secret never reaches a log line.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.secret()?;
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_secs <= 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be 1-{}, got {}",
                MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// The signing secret, or an error naming the missing setting
    #[track_caller]
    pub fn secret(&self) -> ConfigErrorResult<&str> {
        self.jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))
    }
}

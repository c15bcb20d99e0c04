use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_QUERY_TIMEOUT_SECS, MAX_DB_MAX_CONNECTIONS,
    MIN_DB_MAX_CONNECTIONS,
};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
    pub max_connections: u32,
    /// How long SQLite waits on a locked database
    pub busy_timeout_secs: u64,
    /// Deadline for each store operation (0 = none)
    pub query_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep the database inside the config dir
        if self.path.trim().is_empty()
            || Path::new(&self.path).is_absolute()
            || self.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DB_MAX_CONNECTIONS
            || self.max_connections > MAX_DB_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        (self.query_timeout_secs > 0).then(|| Duration::from_secs(self.query_timeout_secs))
    }
}

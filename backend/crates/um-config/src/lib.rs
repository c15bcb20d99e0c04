mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "UM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".um";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

// Auth
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;
const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;
const DEFAULT_BCRYPT_COST: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;

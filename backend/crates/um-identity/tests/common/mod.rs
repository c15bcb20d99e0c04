#![allow(dead_code)]

use um_auth::{JwtValidator, PasswordHasher, TokenIssuer};
use um_db::UserRepository;
use um_identity::IdentityService;

use std::path::Path;

use chrono::Duration;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const SECRET: &[u8] = b"identity-test-secret-at-least-32-bytes";

/// bcrypt minimum, keeps tests fast
pub const TEST_COST: u32 = 4;

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    let pool = um_db::connect(&dir.join("users.db"), &um_db::PoolSettings::default())
        .await
        .expect("Failed to create file pool");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_service(pool: SqlitePool) -> IdentityService {
    IdentityService::new(
        UserRepository::new(pool),
        PasswordHasher::new(TEST_COST),
        TokenIssuer::with_hs256(SECRET),
        Duration::hours(24),
    )
}

pub async fn create_test_service() -> IdentityService {
    create_service(create_test_pool().await)
}

pub fn validator() -> JwtValidator {
    JwtValidator::with_hs256(SECRET)
}

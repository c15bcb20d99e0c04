use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
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

/// Creates a file-backed pool with several connections, for tests that
/// need real write contention
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    let pool = um_db::connect(&dir.join("users.db"), &um_db::PoolSettings::default())
        .await
        .expect("Failed to create file pool");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

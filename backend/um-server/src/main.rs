use um_server::error::{Result as ServerErrorResult, ServerError};
use um_server::{AppState, build_router, logger};

use um_auth::{JwtValidator, PasswordHasher, TokenIssuer};
use um_config::{Config, ConfigError};
use um_db::{PoolSettings, UserRepository};
use um_identity::IdentityService;

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A .env file is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting um-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    let pool = um_db::connect(
        &database_path,
        &PoolSettings {
            max_connections: config.database.max_connections,
            busy_timeout: config.database.busy_timeout(),
        },
    )
    .await?;

    info!("Running database migrations...");
    um_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Build the identity components
    let secret = config.auth.secret()?.as_bytes();
    let token_ttl = chrono::Duration::try_seconds(config.auth.token_ttl_secs).ok_or_else(|| {
        ServerError::Config(ConfigError::auth("auth.token_ttl_secs is out of range"))
    })?;

    let repository = UserRepository::new(pool).with_timeout(config.database.query_timeout());
    let identity = IdentityService::new(
        repository,
        PasswordHasher::new(config.auth.bcrypt_cost),
        TokenIssuer::with_hs256(secret),
        token_ttl,
    );

    let app_state = AppState {
        identity: Arc::new(identity),
        validator: Arc::new(JwtValidator::with_hs256(secret)),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await;
        }
    }
}

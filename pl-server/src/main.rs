use pl_server::{AppState, ServerError, build_router, logger};

use pl_auth::{PasswordService, TokenService};
use pl_config::Config;

use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

/// Fallback signing secret for development when none is configured.
/// Config validation refuses to start production without a real secret.
const DEV_JWT_SECRET: &str = "peerlearn-dev-only-secret-change-me-0000";

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load .env if present, then load and validate configuration
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and apply migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = pl_db::connect(&database_path).await?;

    info!("Database connection established, migrations applied");

    // Signing material: validate() already refused production without a
    // secret, so falling back here means a development run
    let secret = match &config.auth.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            warn!("No JWT secret configured; using the development fallback");
            DEV_JWT_SECRET.to_string()
        }
    };

    let tokens = TokenService::with_hs256(secret.as_bytes(), config.auth.token_ttl_secs);
    info!("JWT: HS256, token ttl {}s", tokens.ttl_secs());

    // Build application state and router
    let state = AppState {
        pool,
        tokens: Arc::new(tokens),
        passwords: Arc::new(PasswordService::new()),
    };

    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}

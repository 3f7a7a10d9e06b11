use lilo_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::net::TcpListener;
use tokio::sync::Notify;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a local .env before reading LILO_* overrides
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = lilo_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting lilo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| lilo_config::ConfigError::auth("auth.jwt_secret is required"))?;

    // Build application state
    let app_state = AppState::in_memory(jwt_secret.as_bytes());

    // Build router
    let app = build_router(app_state, &config.server);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind {
            addr: bind_addr,
            source,
        })?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    let shutdown_started = Arc::new(Notify::new());
    let shutdown_notify = shutdown_started.clone();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            shutdown_notify.notify_one();
        })
        .into_future();
    tokio::pin!(server);

    info!("Server ready to accept connections");
    let grace = Duration::from_secs(config.server.shutdown_timeout_secs);
    let result = tokio::select! {
        result = &mut server => result,
        _ = shutdown_started.notified() => {
            info!("Shutdown requested, draining requests for up to {}s", grace.as_secs());
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Shutdown grace period elapsed with requests still in flight");
                    Ok(())
                }
            }
        }
    };
    result.map_err(|source| ServerError::Serve { source })?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C"),
        Err(e) => warn!("Failed to listen for Ctrl+C, shutting down: {}", e),
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use throne_engine::api::{AppState, create_router};
use throne_engine::config::ConfigLoader;
use throne_engine::store::{FileStore, MemoryStore, ResultStore};

const DEFAULT_CONFIG_DIR: &str = "./config/paid_throne";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "throne_engine=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config_dir =
        std::env::var("THRONE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir))?;
    tracing::info!(
        config_dir = %config_dir,
        service = %config.service().name,
        version = %config.service().version,
        "Loaded engine configuration"
    );

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .context("PORT must be a valid u16")?;

    // --- Result store ---
    let store: Arc<dyn ResultStore> = match std::env::var("THRONE_STORE_PATH") {
        Ok(path) => {
            tracing::info!(path = %path, "Using file result store");
            Arc::new(FileStore::new(path))
        }
        Err(_) => {
            tracing::info!("Using in-memory result store");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(config, store);
    let queue = state.queue().clone();
    let app = create_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(host.parse().context("Invalid HOST address")?, port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Flush results still queued before the runtime goes away
    queue.shutdown().await;
    served.context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Waits for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

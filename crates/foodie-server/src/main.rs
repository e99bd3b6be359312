mod app;
mod dto;
mod error;
mod handlers;
mod services;
mod state;

use anyhow::{Context, Result};
use foodie_config::ServerConfig;
use tracing::info;

use crate::state::ServerState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("invalid server configuration")?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(config.env_filter())
        .compact()
        .init();

    let state = ServerState::default();
    info!(
        "Loaded {} foods: {}",
        state.foods.len(),
        state.foods.names().join(", ")
    );

    let app = app::build_router(state);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}

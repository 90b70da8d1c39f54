//! Teddy Stats - Binary Entry Point
//!
//! Connects to the request log once, then serves the leaderboard API.
//! A failed initial connection ends the process.

use std::sync::Arc;

use tracing::{error, info};

use teddy_stats::api::{create_router, AppState};
use teddy_stats::config::StatsConfig;
use teddy_stats::event_store::JsonlConnector;
use teddy_stats::logging::init_logging;
use teddy_stats::StatsFacade;

#[tokio::main]
async fn main() {
    init_logging();

    let config = match StatsConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let stats = Arc::new(StatsFacade::new(
        JsonlConnector::new(config.store.clone()),
        config.query,
    ));

    // Do not serve with a broken dependency
    if stats.connect().await.is_err() {
        std::process::exit(1);
    }

    let app = create_router(Arc::new(AppState::new(stats)));

    let listener = match tokio::net::TcpListener::bind(config.server.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.server.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    info!(addr = %config.server.bind_addr, version = teddy_stats::VERSION, "serving leaderboards");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("shut down");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

//! Jobboard - Main Entry Point
//! In-memory job post registry behind a REST adapter

mod settings;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_api_http::HttpServer;
use jobboard_core::application::JobBoardService;
use jobboard_infra_memory::InMemoryJobPostRepository;

use crate::settings::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "jobboard=info,tower_http=info";
const SHUTDOWN_GRACE: std::time::Duration = std::time::Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let settings =
        Settings::from_env().map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    // 2. Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    if settings.json_logs() {
        // Production: JSON structured logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init();
    } else {
        // Development: Pretty formatting with colors
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init();
    }

    info!("Jobboard v{} starting...", VERSION);

    // 3. Setup dependencies (explicit wiring)
    let repo = if settings.seed {
        Arc::new(InMemoryJobPostRepository::seeded())
    } else {
        Arc::new(InMemoryJobPostRepository::new())
    };
    info!(posts = repo.len().await, "Registry initialized");

    let job_board = JobBoardService::new(repo);

    // 4. Start HTTP server
    let server = HttpServer::new(settings.http(), job_board);
    let handle = server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server start failed: {}", e))?;

    info!(addr = %handle.local_addr(), "System ready");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    handle.stop();
    match tokio::time::timeout(SHUTDOWN_GRACE, handle.stopped()).await {
        Ok(Ok(())) => info!("Shutdown complete."),
        Ok(Err(e)) => tracing::error!(error = %e, "HTTP server exited with error"),
        Err(_) => tracing::warn!("HTTP server did not stop within grace period"),
    }

    Ok(())
}

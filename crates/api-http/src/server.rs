//! HTTP Server
//!
//! Binds the router to a TCP listener and serves it until asked to stop.

use crate::error::ApiError;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;
use jobboard_core::application::JobBoardService;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, job_board: JobBoardService) -> Self {
        Self {
            config,
            state: AppState::new(job_board),
        }
    }

    /// Start serving in a background task
    ///
    /// Port 0 binds an ephemeral port; read it back from the handle.
    pub async fn start(self) -> Result<HttpServerHandle, ApiError> {
        let cors = cors_layer(&self.config.cors_origin)?;
        let app = build_router(self.state, cors);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;

        info!(
            addr = %local_addr,
            cors_origin = %self.config.cors_origin,
            "HTTP server listening"
        );

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // Sender dropped counts as a stop request too
                    let _ = shutdown_rx.changed().await;
                })
                .await
        });

        Ok(HttpServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Handle to a running server
pub struct HttpServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<std::io::Result<()>>,
}

impl HttpServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Ask the server to finish in-flight requests and exit
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Wait for the serve task to exit. Call `stop` first.
    pub async fn stopped(self) -> Result<(), ApiError> {
        match self.task.await {
            Ok(result) => result.map_err(ApiError::from),
            Err(e) => Err(ApiError::Server(std::io::Error::other(e))),
        }
    }
}

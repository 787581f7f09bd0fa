//! HTTP API Layer
//!
//! REST adapter over the job post registry: axum router, handlers,
//! error-to-status mapping and server lifecycle.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::build_router;
pub use server::{HttpServer, HttpServerConfig, HttpServerHandle};
pub use state::AppState;

//! Liveness and health probes

use axum::extract::State;

use crate::{error::ApiResult, state::AppState};

pub async fn livez() {
    tracing::debug!("service is live");
}

/// Healthy when the registry answers a read
pub async fn healthz(State(state): State<AppState>) -> ApiResult<()> {
    state.job_board.list_all().await?;
    tracing::debug!("service is healthy");
    Ok(())
}

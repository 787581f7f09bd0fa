//! Job post CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jobboard_core::domain::{JobPost, PostId};

use crate::{error::ApiResult, state::AppState};

/// Reply body of a successful delete
pub const DELETE_CONFIRMATION: &str = "Done";

/// GET /jobPosts
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<JobPost>>> {
    let posts = state.job_board.list_all().await?;
    Ok(Json(posts))
}

/// GET /JobPost/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> ApiResult<Json<JobPost>> {
    let post = state.job_board.get_by_id(id).await?;
    Ok(Json(post))
}

/// POST /JobPost
pub async fn create(
    State(state): State<AppState>,
    Json(post): Json<JobPost>,
) -> ApiResult<StatusCode> {
    state.job_board.add(post).await?;
    Ok(StatusCode::OK)
}

/// PUT /JobPost
pub async fn update(
    State(state): State<AppState>,
    Json(post): Json<JobPost>,
) -> ApiResult<Json<JobPost>> {
    let updated = state.job_board.update(post).await?;
    Ok(Json(updated))
}

/// DELETE /jobPost/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> ApiResult<&'static str> {
    state.job_board.delete_by_id(id).await?;
    Ok(DELETE_CONFIRMATION)
}

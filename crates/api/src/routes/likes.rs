//! Like handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use brewbox_core::IdeaId;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::{LikeService, LikeSummary};
use crate::state::AppState;

/// `PUT /ideas/{idea_id}/like`
pub async fn like(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
) -> Result<StatusCode, AppError> {
    LikeService::new(state.pool()).like(actor_id, idea_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /ideas/{idea_id}/like`
pub async fn unlike(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
) -> Result<StatusCode, AppError> {
    LikeService::new(state.pool())
        .unlike(actor_id, idea_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /ideas/{idea_id}/likes`
pub async fn summary(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
) -> Result<Json<LikeSummary>, AppError> {
    let summary = LikeService::new(state.pool())
        .summary(actor_id, idea_id)
        .await?;

    Ok(Json(summary))
}

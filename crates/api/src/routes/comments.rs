//! Comment handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use brewbox_core::{CommentId, IdeaId, PageQuery};

use super::PagedResponse;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::Comment;
use crate::services::CommentService;
use crate::state::AppState;

/// Request body for posting a comment.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Comment text.
    pub text: String,
    /// Display name chosen by the author.
    pub author_name: String,
}

/// `POST /ideas/{idea_id}/comments`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = CommentService::new(state.pool())
        .create(actor_id, idea_id, &req.text, &req.author_name)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// `GET /ideas/{idea_id}/comments`
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<Comment>>, AppError> {
    let page = query.clamped();
    let (comments, total) = CommentService::new(state.pool())
        .list(actor_id, idea_id, page)
        .await?;

    Ok(Json(PagedResponse::new(comments, total, page)))
}

/// `GET /ideas/{idea_id}/comments/{comment_id}`
pub async fn show(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((idea_id, comment_id)): Path<(IdeaId, CommentId)>,
) -> Result<Json<Comment>, AppError> {
    let comment = CommentService::new(state.pool())
        .get(actor_id, idea_id, comment_id)
        .await?;

    Ok(Json(comment))
}

/// `DELETE /ideas/{idea_id}/comments/{comment_id}`
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((idea_id, comment_id)): Path<(IdeaId, CommentId)>,
) -> Result<StatusCode, AppError> {
    CommentService::new(state.pool())
        .delete(actor_id, idea_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

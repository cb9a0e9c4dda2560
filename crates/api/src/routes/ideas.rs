//! Idea handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use brewbox_core::{CategoryId, CoffeeShopId, IdeaId, PageQuery};

use super::PagedResponse;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::{Idea, IdeaStatus};
use crate::services::IdeaService;
use crate::state::AppState;

/// Request body for submitting an idea.
#[derive(Debug, Deserialize)]
pub struct CreateIdeaRequest {
    /// Idea title.
    pub title: String,
    /// Idea body.
    pub description: String,
    /// Optional category within the shop.
    pub category_id: Option<CategoryId>,
}

/// Request body for triaging an idea.
#[derive(Debug, Deserialize)]
pub struct UpdateIdeaStatusRequest {
    /// New triage status.
    pub status: IdeaStatus,
}

/// `POST /coffee-shops/{shop_id}/ideas`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(shop_id): Path<CoffeeShopId>,
    Json(req): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<Idea>), AppError> {
    let idea = IdeaService::new(state.pool())
        .create(
            actor_id,
            shop_id,
            req.category_id,
            &req.title,
            &req.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(idea)))
}

/// `GET /coffee-shops/{shop_id}/ideas`
///
/// Public: the suggestion box is visible to everyone.
pub async fn list(
    State(state): State<AppState>,
    Path(shop_id): Path<CoffeeShopId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<Idea>>, AppError> {
    let page = query.clamped();
    let (ideas, total) = IdeaService::new(state.pool()).list(shop_id, page).await?;

    Ok(Json(PagedResponse::new(ideas, total, page)))
}

/// `GET /ideas/{idea_id}`
///
/// Public.
pub async fn show(
    State(state): State<AppState>,
    Path(idea_id): Path<IdeaId>,
) -> Result<Json<Idea>, AppError> {
    let idea = IdeaService::new(state.pool()).get(idea_id).await?;

    Ok(Json(idea))
}

/// `PATCH /ideas/{idea_id}/status`
pub async fn update_status(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
    Json(req): Json<UpdateIdeaStatusRequest>,
) -> Result<Json<Idea>, AppError> {
    let idea = IdeaService::new(state.pool())
        .update_status(actor_id, idea_id, req.status)
        .await?;

    Ok(Json(idea))
}

/// `DELETE /ideas/{idea_id}`
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(idea_id): Path<IdeaId>,
) -> Result<StatusCode, AppError> {
    IdeaService::new(state.pool())
        .delete(actor_id, idea_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

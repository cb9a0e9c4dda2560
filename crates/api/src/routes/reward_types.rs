//! Reward type handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use brewbox_core::{CoffeeShopId, PageQuery, RewardTypeId};

use super::PagedResponse;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::RewardType;
use crate::services::RewardTypeService;
use crate::state::AppState;

/// Request body for creating or updating a reward type.
#[derive(Debug, Deserialize)]
pub struct RewardTypeRequest {
    /// Reward title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}

/// `POST /coffee-shops/{shop_id}/reward-types`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(shop_id): Path<CoffeeShopId>,
    Json(req): Json<RewardTypeRequest>,
) -> Result<(StatusCode, Json<RewardType>), AppError> {
    let reward_type = RewardTypeService::new(state.pool())
        .create(actor_id, shop_id, &req.title, req.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(reward_type)))
}

/// `GET /coffee-shops/{shop_id}/reward-types`
///
/// Public: customers can see what a shop offers for accepted ideas.
pub async fn list(
    State(state): State<AppState>,
    Path(shop_id): Path<CoffeeShopId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<RewardType>>, AppError> {
    let page = query.clamped();
    let (reward_types, total) = RewardTypeService::new(state.pool())
        .list(shop_id, page)
        .await?;

    Ok(Json(PagedResponse::new(reward_types, total, page)))
}

/// `GET /coffee-shops/{shop_id}/reward-types/{reward_type_id}`
///
/// Public.
pub async fn show(
    State(state): State<AppState>,
    Path((shop_id, reward_type_id)): Path<(CoffeeShopId, RewardTypeId)>,
) -> Result<Json<RewardType>, AppError> {
    let reward_type = RewardTypeService::new(state.pool())
        .get(shop_id, reward_type_id)
        .await?;

    Ok(Json(reward_type))
}

/// `PUT /coffee-shops/{shop_id}/reward-types/{reward_type_id}`
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((shop_id, reward_type_id)): Path<(CoffeeShopId, RewardTypeId)>,
    Json(req): Json<RewardTypeRequest>,
) -> Result<Json<RewardType>, AppError> {
    let reward_type = RewardTypeService::new(state.pool())
        .update(
            actor_id,
            shop_id,
            reward_type_id,
            &req.title,
            req.description.as_deref(),
        )
        .await?;

    Ok(Json(reward_type))
}

/// `DELETE /coffee-shops/{shop_id}/reward-types/{reward_type_id}`
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((shop_id, reward_type_id)): Path<(CoffeeShopId, RewardTypeId)>,
) -> Result<StatusCode, AppError> {
    RewardTypeService::new(state.pool())
        .delete(actor_id, shop_id, reward_type_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

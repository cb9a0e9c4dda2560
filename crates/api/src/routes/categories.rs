//! Category handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use brewbox_core::{CategoryId, CoffeeShopId, PageQuery};

use super::PagedResponse;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::Category;
use crate::services::CategoryService;
use crate::state::AppState;

/// Request body for creating or updating a category.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    /// Category title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}

/// `POST /coffee-shops/{shop_id}/categories`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(shop_id): Path<CoffeeShopId>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = CategoryService::new(state.pool())
        .create(actor_id, shop_id, &req.title, req.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// `GET /coffee-shops/{shop_id}/categories`
///
/// Public: customers browse categories before submitting an idea.
pub async fn list(
    State(state): State<AppState>,
    Path(shop_id): Path<CoffeeShopId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<Category>>, AppError> {
    let page = query.clamped();
    let (categories, total) = CategoryService::new(state.pool())
        .list(shop_id, page)
        .await?;

    Ok(Json(PagedResponse::new(categories, total, page)))
}

/// `GET /coffee-shops/{shop_id}/categories/{category_id}`
///
/// Public.
pub async fn show(
    State(state): State<AppState>,
    Path((shop_id, category_id)): Path<(CoffeeShopId, CategoryId)>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::new(state.pool())
        .get(shop_id, category_id)
        .await?;

    Ok(Json(category))
}

/// `PUT /coffee-shops/{shop_id}/categories/{category_id}`
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((shop_id, category_id)): Path<(CoffeeShopId, CategoryId)>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::new(state.pool())
        .update(
            actor_id,
            shop_id,
            category_id,
            &req.title,
            req.description.as_deref(),
        )
        .await?;

    Ok(Json(category))
}

/// `DELETE /coffee-shops/{shop_id}/categories/{category_id}`
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((shop_id, category_id)): Path<(CoffeeShopId, CategoryId)>,
) -> Result<StatusCode, AppError> {
    CategoryService::new(state.pool())
        .delete(actor_id, shop_id, category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

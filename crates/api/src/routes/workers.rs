//! Worker roster handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use brewbox_core::{CoffeeShopId, PageQuery, UserId, WorkerRelationId};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::{CoffeeShopSummary, UserSummary, WorkerRelationDetails};
use crate::services::RosterService;
use crate::state::AppState;

/// Request body for adding a worker to a shop.
#[derive(Debug, Deserialize)]
pub struct AddWorkerRequest {
    /// The user to enroll.
    pub worker_id: UserId,
}

/// `POST /coffee-shops/{shop_id}/workers`
pub async fn add(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(shop_id): Path<CoffeeShopId>,
    Json(req): Json<AddWorkerRequest>,
) -> Result<(StatusCode, Json<WorkerRelationDetails>), AppError> {
    let details = RosterService::new(state.pool())
        .add_worker(actor_id, req.worker_id, shop_id)
        .await?;

    Ok((StatusCode::CREATED, Json(details)))
}

/// `GET /coffee-shops/{shop_id}/workers`
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(shop_id): Path<CoffeeShopId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let workers = RosterService::new(state.pool())
        .list_workers(actor_id, shop_id, query.clamped())
        .await?;

    Ok(Json(workers))
}

/// `DELETE /worker-relations/{relation_id}`
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(relation_id): Path<WorkerRelationId>,
) -> Result<StatusCode, AppError> {
    RosterService::new(state.pool())
        .remove_worker(actor_id, relation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /workers/{worker_id}/coffee-shops`
pub async fn list_shops(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(worker_id): Path<UserId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<CoffeeShopSummary>>, AppError> {
    let shops = RosterService::new(state.pool())
        .list_shops_for_worker(actor_id, worker_id, query.clamped())
        .await?;

    Ok(Json(shops))
}

//! Coffee shop handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use brewbox_core::CoffeeShopId;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::CoffeeShop;
use crate::services::CoffeeShopService;
use crate::state::AppState;

/// Request body for creating a coffee shop.
#[derive(Debug, Deserialize)]
pub struct CreateCoffeeShopRequest {
    /// Shop name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Free-form contact info.
    pub contacts: Option<String>,
    /// Message shown to customers.
    pub welcome_message: Option<String>,
    /// House rules for submissions.
    pub rules: Option<String>,
}

/// `POST /coffee-shops`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Json(req): Json<CreateCoffeeShopRequest>,
) -> Result<(StatusCode, Json<CoffeeShop>), AppError> {
    let shop = CoffeeShopService::new(state.pool())
        .create(
            actor_id,
            &req.name,
            &req.address,
            req.contacts.as_deref(),
            req.welcome_message.as_deref(),
            req.rules.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(shop)))
}

/// `GET /coffee-shops/{shop_id}`
///
/// Public.
pub async fn show(
    State(state): State<AppState>,
    Path(shop_id): Path<CoffeeShopId>,
) -> Result<Json<CoffeeShop>, AppError> {
    let shop = CoffeeShopService::new(state.pool()).get(shop_id).await?;

    Ok(Json(shop))
}

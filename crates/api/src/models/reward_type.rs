//! Reward type domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use brewbox_core::{CoffeeShopId, EntityState, RewardTypeId};

/// A shop-scoped reward configuration entry.
#[derive(Debug, Clone, Serialize)]
pub struct RewardType {
    /// Unique reward type ID.
    pub id: RewardTypeId,
    /// Owning shop.
    pub coffee_shop_id: CoffeeShopId,
    /// Reward title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle state.
    pub state: EntityState,
    /// When the reward type was created.
    pub created_at: DateTime<Utc>,
}

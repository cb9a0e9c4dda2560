//! Category domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use brewbox_core::{CategoryId, CoffeeShopId, EntityState};

/// A shop-scoped idea category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Owning shop.
    pub coffee_shop_id: CoffeeShopId,
    /// Category title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle state.
    pub state: EntityState,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

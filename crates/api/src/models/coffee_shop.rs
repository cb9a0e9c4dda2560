//! Coffee shop domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use brewbox_core::{CoffeeShopId, EntityState, UserId};

/// A coffee shop (domain type).
///
/// The creator is recorded permanently at creation; ownership never
/// transfers.
#[derive(Debug, Clone, Serialize)]
pub struct CoffeeShop {
    /// Unique shop ID.
    pub id: CoffeeShopId,
    /// The user who created the shop. Always has manage authority.
    pub creator_id: UserId,
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
    /// Lifecycle state.
    pub state: EntityState,
    /// When the shop was created.
    pub created_at: DateTime<Utc>,
}

/// Public display data for a coffee shop, as embedded in roster responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CoffeeShopSummary {
    /// Shop ID.
    pub id: CoffeeShopId,
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

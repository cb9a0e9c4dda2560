//! Idea domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brewbox_core::{CategoryId, CoffeeShopId, EntityState, IdeaId, UserId};

/// Triage status of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, sqlx::Type)]
#[sqlx(type_name = "idea_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    /// Freshly submitted, untriaged.
    #[default]
    New,
    /// A worker has picked it up.
    InReview,
    /// Will be acted on.
    Accepted,
    /// Will not be acted on.
    Rejected,
}

/// A customer suggestion (domain type).
///
/// The shop reference is nullable in storage; an idea reached by a comment
/// operation without a shop association is a data-integrity failure, not an
/// access decision.
#[derive(Debug, Clone, Serialize)]
pub struct Idea {
    /// Unique idea ID.
    pub id: IdeaId,
    /// Owning shop, if any.
    pub coffee_shop_id: Option<CoffeeShopId>,
    /// Category chosen by the submitter, if any.
    pub category_id: Option<CategoryId>,
    /// The submitting user, if authenticated at submission time.
    pub creator_id: Option<UserId>,
    /// Idea title.
    pub title: String,
    /// Idea body.
    pub description: String,
    /// Triage status.
    pub status: IdeaStatus,
    /// Lifecycle state.
    pub state: EntityState,
    /// When the idea was submitted.
    pub created_at: DateTime<Utc>,
}

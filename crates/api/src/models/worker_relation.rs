//! Worker membership domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use brewbox_core::{CoffeeShopId, EntityState, UserId, WorkerRelationId};

use super::{CoffeeShopSummary, UserSummary};

/// Membership of a user in a coffee shop's worker roster.
///
/// The relation's lifecycle is `absent → active → deleted`, and deleted is
/// terminal: re-adding a worker inserts a fresh row with a fresh ID. At most
/// one ACTIVE relation may exist per (worker, shop) pair, enforced by a
/// partial unique index in the database.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerRelation {
    /// Unique relation ID.
    pub id: WorkerRelationId,
    /// The worker.
    pub worker_id: UserId,
    /// The shop.
    pub coffee_shop_id: CoffeeShopId,
    /// Lifecycle state.
    pub state: EntityState,
    /// When the relation was created.
    pub created_at: DateTime<Utc>,
}

/// A relation joined with worker and shop display data, as returned from
/// roster mutations.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerRelationDetails {
    /// Relation ID.
    pub id: WorkerRelationId,
    /// The worker's display data.
    pub worker: UserSummary,
    /// The shop's display data.
    pub coffee_shop: CoffeeShopSummary,
}

//! Worker roster usecases.

use sqlx::PgPool;

use brewbox_core::{CoffeeShopId, PageParams, UserId, WorkerRelationId};

use super::access_control::AccessControl;
use crate::db::{UserRepository, WorkerRelationRepository};
use crate::error::AppError;
use crate::models::{CoffeeShopSummary, UserSummary, WorkerRelationDetails};

/// Deny message for viewing another worker's shop list.
pub const NOT_YOUR_ROSTER: &str = "you can only view your own coffee shops";

/// Worker roster operations.
pub struct RosterService<'a> {
    pool: &'a PgPool,
}

impl<'a> RosterService<'a> {
    /// Create a new roster service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a worker to a shop on behalf of `actor_id`.
    ///
    /// Duplicate active relations are rejected by the database's partial
    /// unique index, so a concurrent double-add surfaces as a conflict rather
    /// than a second row.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop or the worker is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    /// Returns `AppError::Repository` with a conflict if the worker is
    /// already active in the shop.
    pub async fn add_worker(
        &self,
        actor_id: UserId,
        worker_id: UserId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<WorkerRelationDetails, AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        if !UserRepository::new(self.pool).exists(worker_id).await? {
            return Err(AppError::not_found("user", worker_id));
        }

        let details = WorkerRelationRepository::new(self.pool)
            .create(worker_id, coffee_shop_id)
            .await?;

        tracing::info!(
            worker_id = %worker_id,
            coffee_shop_id = %coffee_shop_id,
            "worker added to roster"
        );

        Ok(details)
    }

    /// Remove a worker relation on behalf of `actor_id`.
    ///
    /// The management check runs against the shop the relation belongs to,
    /// which is only known after the relation itself is loaded.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the relation is absent or deleted.
    /// Returns `AppError::AccessDenied` if the actor may not manage the
    /// relation's shop.
    pub async fn remove_worker(
        &self,
        actor_id: UserId,
        relation_id: WorkerRelationId,
    ) -> Result<(), AppError> {
        let relations = WorkerRelationRepository::new(self.pool);

        let relation = relations
            .get_by_id(relation_id)
            .await?
            .ok_or_else(|| AppError::not_found("worker relation", relation_id))?;

        AccessControl::new(self.pool)
            .can_manage(actor_id, relation.coffee_shop_id)
            .await?;

        relations.soft_delete(relation_id).await?;

        tracing::info!(
            relation_id = %relation_id,
            coffee_shop_id = %relation.coffee_shop_id,
            "worker removed from roster"
        );

        Ok(())
    }

    /// List the workers of a shop on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    pub async fn list_workers(
        &self,
        actor_id: UserId,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<Vec<UserSummary>, AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        let workers = WorkerRelationRepository::new(self.pool)
            .list_workers(coffee_shop_id, page)
            .await?;

        Ok(workers)
    }

    /// List the shops `worker_id` belongs to.
    ///
    /// Strictly self-service: only the worker themselves may view their shop
    /// list, admins included.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` if `actor_id` is not `worker_id`.
    pub async fn list_shops_for_worker(
        &self,
        actor_id: UserId,
        worker_id: UserId,
        page: PageParams,
    ) -> Result<Vec<CoffeeShopSummary>, AppError> {
        if actor_id != worker_id {
            return Err(AppError::AccessDenied(NOT_YOUR_ROSTER.to_owned()));
        }

        let shops = WorkerRelationRepository::new(self.pool)
            .list_shops(worker_id, page)
            .await?;

        Ok(shops)
    }
}

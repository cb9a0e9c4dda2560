//! Worker relation repository.
//!
//! The active-uniqueness invariant lives here, not in usecase code: a partial
//! unique index on `(worker_id, coffee_shop_id) WHERE deleted_at IS NULL`
//! rejects concurrent duplicate adds, and the resulting unique violation is
//! surfaced as [`RepositoryError::Conflict`].

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

use brewbox_core::{CoffeeShopId, EntityState, PageParams, UserId, WorkerRelationId};

use super::RepositoryError;
use crate::models::{CoffeeShopSummary, UserSummary, WorkerRelation, WorkerRelationDetails};

/// Internal row type for worker relation queries.
#[derive(Debug, sqlx::FromRow)]
struct WorkerRelationRow {
    id: WorkerRelationId,
    worker_id: UserId,
    coffee_shop_id: CoffeeShopId,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<WorkerRelationRow> for WorkerRelation {
    fn from(row: WorkerRelationRow) -> Self {
        Self {
            id: row.id,
            worker_id: row.worker_id,
            coffee_shop_id: row.coffee_shop_id,
            state: EntityState::from_deleted_at(row.deleted_at),
            created_at: row.created_at,
        }
    }
}

/// Internal row type for relation + worker + shop joins.
#[derive(Debug, sqlx::FromRow)]
struct WorkerRelationDetailsRow {
    id: WorkerRelationId,
    worker_id: UserId,
    worker_name: Option<String>,
    worker_phone: Option<String>,
    shop_id: CoffeeShopId,
    shop_name: String,
    shop_address: String,
    shop_contacts: Option<String>,
    shop_welcome_message: Option<String>,
    shop_rules: Option<String>,
}

impl From<WorkerRelationDetailsRow> for WorkerRelationDetails {
    fn from(row: WorkerRelationDetailsRow) -> Self {
        Self {
            id: row.id,
            worker: UserSummary {
                id: row.worker_id,
                name: row.worker_name,
                phone: row.worker_phone,
            },
            coffee_shop: CoffeeShopSummary {
                id: row.shop_id,
                name: row.shop_name,
                address: row.shop_address,
                contacts: row.shop_contacts,
                welcome_message: row.shop_welcome_message,
                rules: row.shop_rules,
            },
        }
    }
}

const DETAILS_SELECT: &str = "
    SELECT wr.id,
           u.id AS worker_id, u.name AS worker_name, u.phone AS worker_phone,
           cs.id AS shop_id, cs.name AS shop_name, cs.address AS shop_address,
           cs.contacts AS shop_contacts, cs.welcome_message AS shop_welcome_message,
           cs.rules AS shop_rules
    FROM worker_relations wr
    JOIN users u ON u.id = wr.worker_id
    JOIN coffee_shops cs ON cs.id = wr.coffee_shop_id";

/// Repository for worker relation database operations.
pub struct WorkerRelationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkerRelationRepository<'a> {
    /// Create a new worker relation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new active relation and return its ID.
    ///
    /// Takes an executor so enrollment can participate in a transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an active relation already
    /// exists for this (worker, shop) pair.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        worker_id: UserId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<WorkerRelationId, RepositoryError> {
        sqlx::query_scalar::<_, WorkerRelationId>(
            "INSERT INTO worker_relations (worker_id, coffee_shop_id)
             VALUES ($1, $2)
             RETURNING id",
        )
        .bind(worker_id)
        .bind(coffee_shop_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            RepositoryError::from_insert(e, "worker is already active in this coffee shop")
        })
    }

    /// Insert a new active relation and return it joined with display data.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an active relation already
    /// exists for this (worker, shop) pair.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        worker_id: UserId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<WorkerRelationDetails, RepositoryError> {
        let relation_id = Self::insert(self.pool, worker_id, coffee_shop_id).await?;

        let row = sqlx::query_as::<_, WorkerRelationDetailsRow>(&format!(
            "{DETAILS_SELECT} WHERE wr.id = $1"
        ))
        .bind(relation_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get an active relation by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: WorkerRelationId,
    ) -> Result<Option<WorkerRelation>, RepositoryError> {
        let row = sqlx::query_as::<_, WorkerRelationRow>(
            "SELECT id, worker_id, coffee_shop_id, deleted_at, created_at
             FROM worker_relations
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Get the active relation for a (worker, shop) pair, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_active(
        &self,
        worker_id: UserId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<Option<WorkerRelation>, RepositoryError> {
        let row = sqlx::query_as::<_, WorkerRelationRow>(
            "SELECT id, worker_id, coffee_shop_id, deleted_at, created_at
             FROM worker_relations
             WHERE worker_id = $1 AND coffee_shop_id = $2 AND deleted_at IS NULL",
        )
        .bind(worker_id)
        .bind(coffee_shop_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List the workers of a shop (active relations, insertion order).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_workers(
        &self,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<Vec<UserSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.name, u.phone
             FROM worker_relations wr
             JOIN users u ON u.id = wr.worker_id
             WHERE wr.coffee_shop_id = $1 AND wr.deleted_at IS NULL
             ORDER BY wr.created_at ASC
             LIMIT $2 OFFSET $3",
        )
        .bind(coffee_shop_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// List the shops a worker belongs to (active relations, insertion order).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_shops(
        &self,
        worker_id: UserId,
        page: PageParams,
    ) -> Result<Vec<CoffeeShopSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, CoffeeShopSummary>(
            "SELECT cs.id, cs.name, cs.address, cs.contacts, cs.welcome_message, cs.rules
             FROM worker_relations wr
             JOIN coffee_shops cs ON cs.id = wr.coffee_shop_id
             WHERE wr.worker_id = $1 AND wr.deleted_at IS NULL
             ORDER BY wr.created_at ASC
             LIMIT $2 OFFSET $3",
        )
        .bind(worker_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Logically delete an active relation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no active relation exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn soft_delete(&self, id: WorkerRelationId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE worker_relations SET deleted_at = now()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

//! Reward type repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use brewbox_core::{CoffeeShopId, EntityState, PageParams, RewardTypeId};

use super::RepositoryError;
use crate::models::RewardType;

/// Internal row type for reward type queries.
#[derive(Debug, sqlx::FromRow)]
struct RewardTypeRow {
    id: RewardTypeId,
    coffee_shop_id: CoffeeShopId,
    title: String,
    description: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<RewardTypeRow> for RewardType {
    fn from(row: RewardTypeRow) -> Self {
        Self {
            id: row.id,
            coffee_shop_id: row.coffee_shop_id,
            title: row.title,
            description: row.description,
            state: EntityState::from_deleted_at(row.deleted_at),
            created_at: row.created_at,
        }
    }
}

const REWARD_TYPE_COLUMNS: &str = "id, coffee_shop_id, title, description, deleted_at, created_at";

/// Repository for reward type database operations.
pub struct RewardTypeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RewardTypeRepository<'a> {
    /// Create a new reward type repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a reward type in a shop.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        coffee_shop_id: CoffeeShopId,
        title: &str,
        description: Option<&str>,
    ) -> Result<RewardType, RepositoryError> {
        let row = sqlx::query_as::<_, RewardTypeRow>(&format!(
            "INSERT INTO reward_types (coffee_shop_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {REWARD_TYPE_COLUMNS}"
        ))
        .bind(coffee_shop_id)
        .bind(title)
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a visible reward type's title and description.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the reward type doesn't exist
    /// in this shop or is deleted.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: RewardTypeId,
        coffee_shop_id: CoffeeShopId,
        title: &str,
        description: Option<&str>,
    ) -> Result<RewardType, RepositoryError> {
        let row = sqlx::query_as::<_, RewardTypeRow>(&format!(
            "UPDATE reward_types SET title = $3, description = $4
             WHERE id = $1 AND coffee_shop_id = $2 AND deleted_at IS NULL
             RETURNING {REWARD_TYPE_COLUMNS}"
        ))
        .bind(id)
        .bind(coffee_shop_id)
        .bind(title)
        .bind(description)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Logically delete a visible reward type.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the reward type doesn't exist
    /// in this shop or is already deleted.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn soft_delete(
        &self,
        id: RewardTypeId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE reward_types SET deleted_at = now()
             WHERE id = $1 AND coffee_shop_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(coffee_shop_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Get a visible reward type by ID within a shop.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: RewardTypeId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<Option<RewardType>, RepositoryError> {
        let row = sqlx::query_as::<_, RewardTypeRow>(&format!(
            "SELECT {REWARD_TYPE_COLUMNS} FROM reward_types
             WHERE id = $1 AND coffee_shop_id = $2 AND deleted_at IS NULL"
        ))
        .bind(id)
        .bind(coffee_shop_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List a shop's visible reward types with the total count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_by_shop(
        &self,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<(Vec<RewardType>, i64), RepositoryError> {
        let rows = sqlx::query_as::<_, RewardTypeRow>(&format!(
            "SELECT {REWARD_TYPE_COLUMNS} FROM reward_types
             WHERE coffee_shop_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC
             LIMIT $2 OFFSET $3"
        ))
        .bind(coffee_shop_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM reward_types WHERE coffee_shop_id = $1 AND deleted_at IS NULL",
        )
        .bind(coffee_shop_id)
        .fetch_one(self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }
}

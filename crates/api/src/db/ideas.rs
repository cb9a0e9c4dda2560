//! Idea repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use brewbox_core::{CategoryId, CoffeeShopId, EntityState, IdeaId, PageParams, UserId};

use super::RepositoryError;
use crate::models::{Idea, IdeaStatus};

/// Internal row type for idea queries.
#[derive(Debug, sqlx::FromRow)]
struct IdeaRow {
    id: IdeaId,
    coffee_shop_id: Option<CoffeeShopId>,
    category_id: Option<CategoryId>,
    creator_id: Option<UserId>,
    title: String,
    description: String,
    status: IdeaStatus,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<IdeaRow> for Idea {
    fn from(row: IdeaRow) -> Self {
        Self {
            id: row.id,
            coffee_shop_id: row.coffee_shop_id,
            category_id: row.category_id,
            creator_id: row.creator_id,
            title: row.title,
            description: row.description,
            status: row.status,
            state: EntityState::from_deleted_at(row.deleted_at),
            created_at: row.created_at,
        }
    }
}

const IDEA_COLUMNS: &str = "id, coffee_shop_id, category_id, creator_id, title, description, \
                            status, deleted_at, created_at";

/// Repository for idea database operations.
pub struct IdeaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> IdeaRepository<'a> {
    /// Create a new idea repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Submit an idea to a shop.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        coffee_shop_id: CoffeeShopId,
        category_id: Option<CategoryId>,
        creator_id: Option<UserId>,
        title: &str,
        description: &str,
    ) -> Result<Idea, RepositoryError> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "INSERT INTO ideas (coffee_shop_id, category_id, creator_id, title, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IDEA_COLUMNS}"
        ))
        .bind(coffee_shop_id)
        .bind(category_id)
        .bind(creator_id)
        .bind(title)
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get a visible idea by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: IdeaId) -> Result<Option<Idea>, RepositoryError> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List a shop's visible ideas, newest first, with the total count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_by_shop(
        &self,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<(Vec<Idea>, i64), RepositoryError> {
        let rows = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas
             WHERE coffee_shop_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(coffee_shop_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ideas WHERE coffee_shop_id = $1 AND deleted_at IS NULL",
        )
        .bind(coffee_shop_id)
        .fetch_one(self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Move a visible idea to a new triage status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the idea doesn't exist or is
    /// deleted.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: IdeaId,
        status: IdeaStatus,
    ) -> Result<Idea, RepositoryError> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "UPDATE ideas SET status = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {IDEA_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Logically delete a visible idea.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the idea doesn't exist or is
    /// already deleted.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn soft_delete(&self, id: IdeaId) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE ideas SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

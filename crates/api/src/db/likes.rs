//! Like repository.
//!
//! Likes are hard-deleted: a like carries no history worth keeping, and the
//! `(user_id, idea_id)` unique index doubles as the double-like guard.

use sqlx::PgPool;

use brewbox_core::{IdeaId, UserId};

use super::RepositoryError;

/// Repository for like database operations.
pub struct LikeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LikeRepository<'a> {
    /// Create a new like repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a like by a user on an idea.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the user already liked the
    /// idea.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, user_id: UserId, idea_id: IdeaId) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO likes (user_id, idea_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(idea_id)
            .execute(self.pool)
            .await
            .map_err(|e| RepositoryError::from_insert(e, "idea is already liked"))?;

        Ok(())
    }

    /// Remove a user's like from an idea.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no like exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, user_id: UserId, idea_id: IdeaId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND idea_id = $2")
            .bind(user_id)
            .bind(idea_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Check whether a user has liked an idea.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn has_liked(&self, user_id: UserId, idea_id: IdeaId) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND idea_id = $2)",
        )
        .bind(user_id)
        .bind(idea_id)
        .fetch_one(self.pool)
        .await?;

        Ok(found)
    }

    /// Count the likes on an idea.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self, idea_id: IdeaId) -> Result<i64, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE idea_id = $1")
            .bind(idea_id)
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }
}

//! Comment repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use brewbox_core::{CommentId, EntityState, IdeaId, PageParams, UserId};

use super::RepositoryError;
use crate::models::Comment;

/// Internal row type for comment queries.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: CommentId,
    idea_id: IdeaId,
    creator_id: UserId,
    text: String,
    author_name: String,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            idea_id: row.idea_id,
            creator_id: row.creator_id,
            text: row.text,
            author_name: row.author_name,
            state: EntityState::from_deleted_at(row.deleted_at),
            created_at: row.created_at,
        }
    }
}

const COMMENT_COLUMNS: &str =
    "id, idea_id, creator_id, text, author_name, deleted_at, created_at";

/// Repository for comment database operations.
pub struct CommentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Post a comment on an idea.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        idea_id: IdeaId,
        creator_id: UserId,
        text: &str,
        author_name: &str,
    ) -> Result<Comment, RepositoryError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (idea_id, creator_id, text, author_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(idea_id)
        .bind(creator_id)
        .bind(text)
        .bind(author_name)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get a visible comment by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List an idea's visible comments, oldest first, with the total count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_by_idea(
        &self,
        idea_id: IdeaId,
        page: PageParams,
    ) -> Result<(Vec<Comment>, i64), RepositoryError> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE idea_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC
             LIMIT $2 OFFSET $3"
        ))
        .bind(idea_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE idea_id = $1 AND deleted_at IS NULL",
        )
        .bind(idea_id)
        .fetch_one(self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Logically delete a visible comment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the comment doesn't exist or is
    /// already deleted.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn soft_delete(&self, id: CommentId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE comments SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
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

//! Like usecases.

use sqlx::PgPool;

use brewbox_core::{IdeaId, UserId};

use crate::db::{IdeaRepository, LikeRepository};
use crate::error::AppError;

/// Like counts and the caller's own mark for one idea.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct LikeSummary {
    /// Total likes on the idea.
    pub count: i64,
    /// Whether the requesting user has liked it.
    pub liked: bool,
}

/// Like operations.
pub struct LikeService<'a> {
    pool: &'a PgPool,
}

impl<'a> LikeService<'a> {
    /// Create a new like service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    async fn require_idea(&self, idea_id: IdeaId) -> Result<(), AppError> {
        IdeaRepository::new(self.pool)
            .get_by_id(idea_id)
            .await?
            .ok_or_else(|| AppError::not_found("idea", idea_id))?;
        Ok(())
    }

    /// Like an idea on behalf of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    /// Returns `AppError::Repository` with a conflict if already liked.
    pub async fn like(&self, user_id: UserId, idea_id: IdeaId) -> Result<(), AppError> {
        self.require_idea(idea_id).await?;

        LikeRepository::new(self.pool).create(user_id, idea_id).await?;

        Ok(())
    }

    /// Remove a like on behalf of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or no like exists.
    pub async fn unlike(&self, user_id: UserId, idea_id: IdeaId) -> Result<(), AppError> {
        self.require_idea(idea_id).await?;

        LikeRepository::new(self.pool).delete(user_id, idea_id).await?;

        Ok(())
    }

    /// Summarize likes on an idea for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    pub async fn summary(&self, user_id: UserId, idea_id: IdeaId) -> Result<LikeSummary, AppError> {
        self.require_idea(idea_id).await?;

        let likes = LikeRepository::new(self.pool);
        let count = likes.count(idea_id).await?;
        let liked = likes.has_liked(user_id, idea_id).await?;

        Ok(LikeSummary { count, liked })
    }
}

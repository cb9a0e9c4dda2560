//! Comment usecases.
//!
//! Comments are internal worker notes, so every operation, reads included,
//! requires an active worker relation with the shop the idea belongs to.

use sqlx::PgPool;

use brewbox_core::{CoffeeShopId, CommentId, IdeaId, PageParams, UserId};

use super::access_control::AccessControl;
use crate::db::{CommentRepository, IdeaRepository};
use crate::error::AppError;
use crate::models::Comment;

/// Comment operations.
pub struct CommentService<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentService<'a> {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the idea and require the actor to be an active worker of its shop.
    ///
    /// An idea without a shop association cannot be access-checked; that is a
    /// data-integrity failure, not a permission verdict.
    async fn authorize_on_idea(
        &self,
        actor_id: UserId,
        idea_id: IdeaId,
    ) -> Result<CoffeeShopId, AppError> {
        let idea = IdeaRepository::new(self.pool)
            .get_by_id(idea_id)
            .await?
            .ok_or_else(|| AppError::not_found("idea", idea_id))?;

        let coffee_shop_id = idea.coffee_shop_id.ok_or_else(|| {
            AppError::Internal(format!("idea {idea_id} has no coffee shop association"))
        })?;

        AccessControl::new(self.pool)
            .require_active_worker(actor_id, coffee_shop_id)
            .await?;

        Ok(coffee_shop_id)
    }

    /// Post a comment on an idea on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    /// Returns `AppError::AccessDenied` if the actor is not an active worker
    /// of the idea's shop.
    /// Returns `AppError::Internal` if the idea has no shop association.
    pub async fn create(
        &self,
        actor_id: UserId,
        idea_id: IdeaId,
        text: &str,
        author_name: &str,
    ) -> Result<Comment, AppError> {
        self.authorize_on_idea(actor_id, idea_id).await?;

        let comment = CommentRepository::new(self.pool)
            .create(idea_id, actor_id, text, author_name)
            .await?;

        Ok(comment)
    }

    /// Get a single comment on an idea.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea or the comment is absent.
    /// Returns `AppError::NotValid` if the comment belongs to another idea.
    /// Returns `AppError::AccessDenied` if the actor is not an active worker
    /// of the idea's shop.
    pub async fn get(
        &self,
        actor_id: UserId,
        idea_id: IdeaId,
        comment_id: CommentId,
    ) -> Result<Comment, AppError> {
        self.authorize_on_idea(actor_id, idea_id).await?;

        let comment = CommentRepository::new(self.pool)
            .get_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("comment", comment_id))?;

        if comment.idea_id != idea_id {
            return Err(AppError::NotValid(
                "comment does not belong to this idea".to_owned(),
            ));
        }

        Ok(comment)
    }

    /// List an idea's comments with the total count.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    /// Returns `AppError::AccessDenied` if the actor is not an active worker
    /// of the idea's shop.
    pub async fn list(
        &self,
        actor_id: UserId,
        idea_id: IdeaId,
        page: PageParams,
    ) -> Result<(Vec<Comment>, i64), AppError> {
        self.authorize_on_idea(actor_id, idea_id).await?;

        let result = CommentRepository::new(self.pool)
            .list_by_idea(idea_id, page)
            .await?;

        Ok(result)
    }

    /// Logically delete a comment on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea or the comment is absent.
    /// Returns `AppError::NotValid` if the comment belongs to another idea.
    /// Returns `AppError::AccessDenied` if the actor is not an active worker
    /// of the idea's shop.
    pub async fn delete(
        &self,
        actor_id: UserId,
        idea_id: IdeaId,
        comment_id: CommentId,
    ) -> Result<(), AppError> {
        // get() performs the authorization and the idea/comment match check.
        self.get(actor_id, idea_id, comment_id).await?;

        CommentRepository::new(self.pool)
            .soft_delete(comment_id)
            .await?;

        Ok(())
    }
}

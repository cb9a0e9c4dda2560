//! Idea usecases.
//!
//! Submission is open to any authenticated user; triage (status changes and
//! deletion) requires management access to the owning shop.

use sqlx::PgPool;

use brewbox_core::{CategoryId, CoffeeShopId, IdeaId, PageParams, UserId};

use super::access_control::AccessControl;
use crate::db::{CategoryRepository, CoffeeShopRepository, IdeaRepository};
use crate::error::AppError;
use crate::models::{Idea, IdeaStatus};

/// Idea operations.
pub struct IdeaService<'a> {
    pool: &'a PgPool,
}

impl<'a> IdeaService<'a> {
    /// Create a new idea service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Submit an idea to a shop.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop is absent, or if a category
    /// was given and doesn't belong to the shop.
    pub async fn create(
        &self,
        creator_id: UserId,
        coffee_shop_id: CoffeeShopId,
        category_id: Option<CategoryId>,
        title: &str,
        description: &str,
    ) -> Result<Idea, AppError> {
        let shop = CoffeeShopRepository::new(self.pool)
            .get_by_id(coffee_shop_id)
            .await?
            .ok_or_else(|| AppError::not_found("coffee shop", coffee_shop_id))?;

        if let Some(category_id) = category_id {
            CategoryRepository::new(self.pool)
                .get_by_id(category_id, shop.id)
                .await?
                .ok_or_else(|| AppError::not_found("category", category_id))?;
        }

        let idea = IdeaRepository::new(self.pool)
            .create(shop.id, category_id, Some(creator_id), title, description)
            .await?;

        Ok(idea)
    }

    /// Get a single idea.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    pub async fn get(&self, idea_id: IdeaId) -> Result<Idea, AppError> {
        IdeaRepository::new(self.pool)
            .get_by_id(idea_id)
            .await?
            .ok_or_else(|| AppError::not_found("idea", idea_id))
    }

    /// List a shop's ideas with the total count.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop is absent.
    pub async fn list(
        &self,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<(Vec<Idea>, i64), AppError> {
        let shop = CoffeeShopRepository::new(self.pool)
            .get_by_id(coffee_shop_id)
            .await?
            .ok_or_else(|| AppError::not_found("coffee shop", coffee_shop_id))?;

        let result = IdeaRepository::new(self.pool)
            .list_by_shop(shop.id, page)
            .await?;

        Ok(result)
    }

    /// Move an idea to a new triage status on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    /// Returns `AppError::AccessDenied` if the actor may not manage the
    /// idea's shop.
    /// Returns `AppError::Internal` if the idea has no shop association.
    pub async fn update_status(
        &self,
        actor_id: UserId,
        idea_id: IdeaId,
        status: IdeaStatus,
    ) -> Result<Idea, AppError> {
        self.authorize_manage(actor_id, idea_id).await?;

        let idea = IdeaRepository::new(self.pool)
            .update_status(idea_id, status)
            .await?;

        Ok(idea)
    }

    /// Logically delete an idea on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the idea is absent or deleted.
    /// Returns `AppError::AccessDenied` if the actor may not manage the
    /// idea's shop.
    /// Returns `AppError::Internal` if the idea has no shop association.
    pub async fn delete(&self, actor_id: UserId, idea_id: IdeaId) -> Result<(), AppError> {
        self.authorize_manage(actor_id, idea_id).await?;

        IdeaRepository::new(self.pool).soft_delete(idea_id).await?;

        Ok(())
    }

    async fn authorize_manage(&self, actor_id: UserId, idea_id: IdeaId) -> Result<(), AppError> {
        let idea = IdeaRepository::new(self.pool)
            .get_by_id(idea_id)
            .await?
            .ok_or_else(|| AppError::not_found("idea", idea_id))?;

        let coffee_shop_id = idea.coffee_shop_id.ok_or_else(|| {
            AppError::Internal(format!("idea {idea_id} has no coffee shop association"))
        })?;

        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        Ok(())
    }
}

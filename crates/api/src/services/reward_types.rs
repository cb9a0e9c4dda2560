//! Reward type usecases.
//!
//! Same access shape as categories: management access for mutations, open
//! reads.

use sqlx::PgPool;

use brewbox_core::{CoffeeShopId, PageParams, RewardTypeId, UserId};

use super::access_control::AccessControl;
use crate::db::{RepositoryError, RewardTypeRepository};
use crate::error::AppError;
use crate::models::RewardType;

/// Reward type operations.
pub struct RewardTypeService<'a> {
    pool: &'a PgPool,
}

impl<'a> RewardTypeService<'a> {
    /// Create a new reward type service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a reward type in a shop on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    pub async fn create(
        &self,
        actor_id: UserId,
        coffee_shop_id: CoffeeShopId,
        title: &str,
        description: Option<&str>,
    ) -> Result<RewardType, AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        let reward_type = RewardTypeRepository::new(self.pool)
            .create(coffee_shop_id, title, description)
            .await?;

        Ok(reward_type)
    }

    /// Update a reward type on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop or the reward type is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    pub async fn update(
        &self,
        actor_id: UserId,
        coffee_shop_id: CoffeeShopId,
        reward_type_id: RewardTypeId,
        title: &str,
        description: Option<&str>,
    ) -> Result<RewardType, AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        RewardTypeRepository::new(self.pool)
            .update(reward_type_id, coffee_shop_id, title, description)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AppError::not_found("reward type", reward_type_id),
                other => other.into(),
            })
    }

    /// Logically delete a reward type on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop or the reward type is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    pub async fn delete(
        &self,
        actor_id: UserId,
        coffee_shop_id: CoffeeShopId,
        reward_type_id: RewardTypeId,
    ) -> Result<(), AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        RewardTypeRepository::new(self.pool)
            .soft_delete(reward_type_id, coffee_shop_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AppError::not_found("reward type", reward_type_id),
                other => other.into(),
            })
    }

    /// Get a single reward type in a shop.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the reward type is absent or deleted.
    pub async fn get(
        &self,
        coffee_shop_id: CoffeeShopId,
        reward_type_id: RewardTypeId,
    ) -> Result<RewardType, AppError> {
        RewardTypeRepository::new(self.pool)
            .get_by_id(reward_type_id, coffee_shop_id)
            .await?
            .ok_or_else(|| AppError::not_found("reward type", reward_type_id))
    }

    /// List a shop's reward types with the total count.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn list(
        &self,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<(Vec<RewardType>, i64), AppError> {
        let result = RewardTypeRepository::new(self.pool)
            .list_by_shop(coffee_shop_id, page)
            .await?;

        Ok(result)
    }
}

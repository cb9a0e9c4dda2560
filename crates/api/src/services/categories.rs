//! Category usecases.
//!
//! Mutations require management access to the owning shop; reads are open to
//! any authenticated user so customers can browse a shop's categories.

use sqlx::PgPool;

use brewbox_core::{CategoryId, CoffeeShopId, PageParams, UserId};

use super::access_control::AccessControl;
use crate::db::{CategoryRepository, RepositoryError};
use crate::error::AppError;
use crate::models::Category;

/// Category operations.
pub struct CategoryService<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a category in a shop on behalf of `actor_id`.
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
    ) -> Result<Category, AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        let category = CategoryRepository::new(self.pool)
            .create(coffee_shop_id, title, description)
            .await?;

        Ok(category)
    }

    /// Update a category on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop or the category is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    pub async fn update(
        &self,
        actor_id: UserId,
        coffee_shop_id: CoffeeShopId,
        category_id: CategoryId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Category, AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        CategoryRepository::new(self.pool)
            .update(category_id, coffee_shop_id, title, description)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::not_found("category", category_id)
                }
                other => other.into(),
            })
    }

    /// Logically delete a category on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop or the category is absent.
    /// Returns `AppError::AccessDenied` if the actor may not manage the shop.
    pub async fn delete(
        &self,
        actor_id: UserId,
        coffee_shop_id: CoffeeShopId,
        category_id: CategoryId,
    ) -> Result<(), AppError> {
        AccessControl::new(self.pool)
            .can_manage(actor_id, coffee_shop_id)
            .await?;

        CategoryRepository::new(self.pool)
            .soft_delete(category_id, coffee_shop_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::not_found("category", category_id)
                }
                other => other.into(),
            })
    }

    /// Get a single category in a shop.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the category is absent or deleted.
    pub async fn get(
        &self,
        coffee_shop_id: CoffeeShopId,
        category_id: CategoryId,
    ) -> Result<Category, AppError> {
        CategoryRepository::new(self.pool)
            .get_by_id(category_id, coffee_shop_id)
            .await?
            .ok_or_else(|| AppError::not_found("category", category_id))
    }

    /// List a shop's categories with the total count.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn list(
        &self,
        coffee_shop_id: CoffeeShopId,
        page: PageParams,
    ) -> Result<(Vec<Category>, i64), AppError> {
        let result = CategoryRepository::new(self.pool)
            .list_by_shop(coffee_shop_id, page)
            .await?;

        Ok(result)
    }
}

//! Coffee shop usecases.

use sqlx::PgPool;

use brewbox_core::{CoffeeShopId, UserId};

use crate::db::{CoffeeShopRepository, RepositoryError, WorkerRelationRepository};
use crate::error::AppError;
use crate::models::CoffeeShop;

/// Coffee shop operations.
pub struct CoffeeShopService<'a> {
    pool: &'a PgPool,
}

impl<'a> CoffeeShopService<'a> {
    /// Create a new coffee shop service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a coffee shop with `creator_id` as its permanent creator.
    ///
    /// The creator is also enrolled as the shop's first active worker so
    /// their roster view includes their own shop. Both writes commit in one
    /// transaction; a shop never exists without its creator on the roster.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if a write fails.
    pub async fn create(
        &self,
        creator_id: UserId,
        name: &str,
        address: &str,
        contacts: Option<&str>,
        welcome_message: Option<&str>,
        rules: Option<&str>,
    ) -> Result<CoffeeShop, AppError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

        let shop = CoffeeShopRepository::insert(
            &mut *tx,
            creator_id,
            name,
            address,
            contacts,
            welcome_message,
            rules,
        )
        .await?;

        WorkerRelationRepository::insert(&mut *tx, creator_id, shop.id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        tracing::info!(coffee_shop_id = %shop.id, "coffee shop created");

        Ok(shop)
    }

    /// Get a single coffee shop.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop is absent or deleted.
    pub async fn get(&self, coffee_shop_id: CoffeeShopId) -> Result<CoffeeShop, AppError> {
        CoffeeShopRepository::new(self.pool)
            .get_by_id(coffee_shop_id)
            .await?
            .ok_or_else(|| AppError::not_found("coffee shop", coffee_shop_id))
    }
}

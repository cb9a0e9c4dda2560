//! Coffee shop repository.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

use brewbox_core::{CoffeeShopId, EntityState, UserId};

use super::RepositoryError;
use crate::models::CoffeeShop;

/// Internal row type for coffee shop queries.
#[derive(Debug, sqlx::FromRow)]
struct CoffeeShopRow {
    id: CoffeeShopId,
    creator_id: UserId,
    name: String,
    address: String,
    contacts: Option<String>,
    welcome_message: Option<String>,
    rules: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<CoffeeShopRow> for CoffeeShop {
    fn from(row: CoffeeShopRow) -> Self {
        Self {
            id: row.id,
            creator_id: row.creator_id,
            name: row.name,
            address: row.address,
            contacts: row.contacts,
            welcome_message: row.welcome_message,
            rules: row.rules,
            state: EntityState::from_deleted_at(row.deleted_at),
            created_at: row.created_at,
        }
    }
}

const SHOP_COLUMNS: &str =
    "id, creator_id, name, address, contacts, welcome_message, rules, deleted_at, created_at";

/// Repository for coffee shop database operations.
pub struct CoffeeShopRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CoffeeShopRepository<'a> {
    /// Create a new coffee shop repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a visible coffee shop by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CoffeeShopId) -> Result<Option<CoffeeShop>, RepositoryError> {
        let row = sqlx::query_as::<_, CoffeeShopRow>(&format!(
            "SELECT {SHOP_COLUMNS} FROM coffee_shops WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a coffee shop with the given creator.
    ///
    /// Takes an executor so shop creation can share a transaction with the
    /// creator's roster enrollment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        creator_id: UserId,
        name: &str,
        address: &str,
        contacts: Option<&str>,
        welcome_message: Option<&str>,
        rules: Option<&str>,
    ) -> Result<CoffeeShop, RepositoryError> {
        let row = sqlx::query_as::<_, CoffeeShopRow>(&format!(
            "INSERT INTO coffee_shops (creator_id, name, address, contacts, welcome_message, rules)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SHOP_COLUMNS}"
        ))
        .bind(creator_id)
        .bind(name)
        .bind(address)
        .bind(contacts)
        .bind(welcome_message)
        .bind(rules)
        .fetch_one(executor)
        .await?;

        Ok(row.into())
    }
}

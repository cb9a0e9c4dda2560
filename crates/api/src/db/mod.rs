//! Database operations for the Brewbox `PostgreSQL` schema.
//!
//! ## Tables
//!
//! - `users` - User identities with a global role
//! - `coffee_shops` - Tenants; each records its creator permanently
//! - `worker_relations` - Worker membership per shop (soft-deleted only)
//! - `categories` - Shop-scoped idea categories
//! - `reward_types` - Shop-scoped reward configuration
//! - `ideas` - Customer suggestions
//! - `comments` - Worker notes on ideas
//! - `likes` - (user, idea) like marks
//!
//! All soft-deletable tables carry a `deleted_at` column; repositories
//! convert it into [`brewbox_core::EntityState`] exactly once, and every read
//! filters `deleted_at IS NULL`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p brewbox-cli -- migrate
//! ```

pub mod categories;
pub mod coffee_shops;
pub mod comments;
pub mod ideas;
pub mod likes;
pub mod reward_types;
pub mod users;
pub mod worker_relations;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use categories::CategoryRepository;
pub use coffee_shops::CoffeeShopRepository;
pub use comments::CommentRepository;
pub use ideas::IdeaRepository;
pub use likes::LikeRepository;
pub use reward_types::RewardTypeRepository;
pub use users::UserRepository;
pub use worker_relations::WorkerRelationRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found (or is logically deleted).
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate active worker relation).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Classify a sqlx error from an INSERT, turning unique violations into
    /// [`RepositoryError::Conflict`] with the given message.
    pub(crate) fn from_insert(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict_message.to_owned());
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

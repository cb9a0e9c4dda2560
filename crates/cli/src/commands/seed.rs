//! Seeding commands for development and staging environments.

use std::str::FromStr;

use tracing::info;

use brewbox_api::db::{self, UserRepository};
use brewbox_api::services::CoffeeShopService;
use brewbox_core::{Role, UserId};

use super::CliError;

/// Create a user.
///
/// # Errors
///
/// Returns an error if the role is unknown, the login or phone is taken, or
/// the database is unreachable.
pub async fn create_user(
    name: &str,
    login: Option<&str>,
    phone: Option<&str>,
    role: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = Role::from_str(role)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await.map_err(CliError::from)?;

    let user = UserRepository::new(&pool)
        .create(Some(name), login, phone, role)
        .await?;

    info!(user_id = %user.id, role = %user.role, "User created");
    Ok(())
}

/// Create a coffee shop owned by an existing user.
///
/// The creator is enrolled as the shop's first worker, same as through the
/// API.
///
/// # Errors
///
/// Returns an error if the creator ID is malformed or the database write
/// fails.
pub async fn create_shop(
    creator: &str,
    name: &str,
    address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let creator_id = UserId::from_str(creator)
        .map_err(|e| CliError::InvalidArgument(format!("creator: {e}")))?;

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await.map_err(CliError::from)?;

    let shop = CoffeeShopService::new(&pool)
        .create(creator_id, name, address, None, None, None)
        .await?;

    info!(coffee_shop_id = %shop.id, "Coffee shop created");
    Ok(())
}

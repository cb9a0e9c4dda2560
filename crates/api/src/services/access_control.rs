//! Shop management access control.
//!
//! Every privileged shop operation funnels through [`AccessControl`], which
//! resolves one question: may this user manage this coffee shop? The verdict
//! itself is computed by the pure [`decide`] function over three facts
//! (creator, role, active membership); this module's async code only gathers
//! those facts, in a fixed lookup order that determines which error a caller
//! sees first.

use sqlx::PgPool;

use brewbox_core::{CoffeeShopId, Role, UserId};

use crate::db::{CoffeeShopRepository, UserRepository, WorkerRelationRepository};
use crate::error::AppError;
use crate::models::CoffeeShop;

/// Deny message for non-admins and for admins without an active relation.
pub const NOT_AN_ADMIN: &str = "user is not an admin for this coffee shop";

/// Deny message for comment operations by non-workers.
pub const NOT_A_WORKER: &str = "user is not a worker for this coffee shop";

/// Outcome of a management access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The user may manage the shop.
    Allow,
    /// The user may not; the message is returned to the client verbatim.
    Deny(&'static str),
}

impl AccessDecision {
    /// Whether this decision grants access.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide management access from already-resolved facts.
///
/// The shop's creator always manages it. Anyone else needs both the admin
/// role and a currently active worker relation with the shop; either one
/// alone is denied.
#[must_use]
pub const fn decide(is_creator: bool, role: Role, has_active_membership: bool) -> AccessDecision {
    if is_creator {
        return AccessDecision::Allow;
    }
    if !role.is_admin() {
        return AccessDecision::Deny(NOT_AN_ADMIN);
    }
    if has_active_membership {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny(NOT_AN_ADMIN)
    }
}

/// Access control resolver backed by the database.
pub struct AccessControl<'a> {
    pool: &'a PgPool,
}

impl<'a> AccessControl<'a> {
    /// Create a new access control resolver.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Require that `user_id` may manage `coffee_shop_id`, returning the shop.
    ///
    /// Lookups happen in a fixed order so the client sees the most specific
    /// failure: missing shop before missing user, missing user before any
    /// permission verdict.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the shop or the user is absent or
    /// deleted.
    /// Returns `AppError::AccessDenied` if the user may not manage the shop.
    /// Returns `AppError::Repository` if a lookup fails.
    pub async fn can_manage(
        &self,
        user_id: UserId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<CoffeeShop, AppError> {
        let shop = CoffeeShopRepository::new(self.pool)
            .get_by_id(coffee_shop_id)
            .await?
            .ok_or_else(|| AppError::not_found("coffee shop", coffee_shop_id))?;

        if shop.creator_id == user_id {
            return Ok(shop);
        }

        let user = UserRepository::new(self.pool)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("user", user_id))?;

        // Membership is only checked for admins; a plain member is denied
        // without touching worker_relations.
        if !user.role.is_admin() {
            return Err(AppError::AccessDenied(NOT_AN_ADMIN.to_owned()));
        }

        let membership = WorkerRelationRepository::new(self.pool)
            .get_active(user_id, coffee_shop_id)
            .await?;

        match decide(false, user.role, membership.is_some()) {
            AccessDecision::Allow => Ok(shop),
            AccessDecision::Deny(message) => Err(AppError::AccessDenied(message.to_owned())),
        }
    }

    /// Require that `user_id` is an active worker of `coffee_shop_id`.
    ///
    /// This is the comment-operation gate: any active worker of the idea's
    /// shop qualifies, regardless of role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` if no active relation exists.
    /// Returns `AppError::Repository` if the lookup fails.
    pub async fn require_active_worker(
        &self,
        user_id: UserId,
        coffee_shop_id: CoffeeShopId,
    ) -> Result<(), AppError> {
        let membership = WorkerRelationRepository::new(self.pool)
            .get_active(user_id, coffee_shop_id)
            .await?;

        if membership.is_none() {
            return Err(AppError::AccessDenied(NOT_A_WORKER.to_owned()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_always_allowed() {
        // Role and membership are irrelevant for the creator.
        assert!(decide(true, Role::Member, false).is_allowed());
        assert!(decide(true, Role::Admin, false).is_allowed());
        assert!(decide(true, Role::Member, true).is_allowed());
    }

    #[test]
    fn test_admin_with_active_membership_allowed() {
        assert!(decide(false, Role::Admin, true).is_allowed());
    }

    #[test]
    fn test_admin_without_membership_denied() {
        assert_eq!(
            decide(false, Role::Admin, false),
            AccessDecision::Deny(NOT_AN_ADMIN)
        );
    }

    #[test]
    fn test_member_denied_even_with_membership() {
        assert_eq!(
            decide(false, Role::Member, true),
            AccessDecision::Deny(NOT_AN_ADMIN)
        );
        assert_eq!(
            decide(false, Role::Member, false),
            AccessDecision::Deny(NOT_AN_ADMIN)
        );
    }
}

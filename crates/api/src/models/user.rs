//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use brewbox_core::{EntityState, Role, UserId};

/// A user identity (domain type).
///
/// Identity provisioning (OTP login, token refresh) lives outside this
/// service; users arrive here already created.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: Option<String>,
    /// Login, unique when present.
    pub login: Option<String>,
    /// Phone number, unique when present.
    pub phone: Option<String>,
    /// Global role; `Admin` is necessary but not sufficient for shop management.
    pub role: Role,
    /// Lifecycle state (users are soft-deleted like everything else).
    pub state: EntityState,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Public display data for a user, as embedded in roster responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserSummary {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

//! Global user roles.
//!
//! A role is a system-wide attribute of a user, not scoped to any coffee
//! shop. Shop-scoped authority is granted through worker membership; see the
//! access-control service in `brewbox-api`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown role string.
#[derive(Debug, Error)]
#[error("invalid role: {0}")]
pub struct RoleParseError(String);

/// Global user role.
///
/// `Admin` alone grants nothing shop-scoped: manage authority additionally
/// requires active worker membership in the specific shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(type_name = "user_role", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May manage shops where they are also an active worker.
    Admin,
    /// Everyone else: customers and plain workers.
    #[default]
    Member,
}

impl Role {
    /// Whether this role participates in manage-authority resolution.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display_roundtrip() {
        for role in [Role::Admin, Role::Member] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_default_role_is_member() {
        assert_eq!(Role::default(), Role::Member);
        assert!(!Role::default().is_admin());
    }
}

//! Entity lifecycle state.
//!
//! Every soft-deletable row carries a `deleted_at` column in Postgres. At the
//! data-access boundary that column is converted exactly once into an
//! [`EntityState`], so "is this row visible" is a total function instead of a
//! boolean flag re-derived in every query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a soft-deletable entity.
///
/// Deletion is logical and terminal: a `Deleted` row is never reactivated and
/// never physically removed, so identifiers remain permanently allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntityState {
    /// Visible to all reads.
    Active,
    /// Logically deleted; filtered out of all reads.
    Deleted {
        /// When the logical delete happened.
        at: DateTime<Utc>,
    },
}

impl EntityState {
    /// Derive the state from a `deleted_at` column value.
    #[must_use]
    pub const fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            None => Self::Active,
            Some(at) => Self::Deleted { at },
        }
    }

    /// Whether reads should see this entity.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// The deletion timestamp, if deleted.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::Deleted { at } => Some(*at),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_null_column() {
        let state = EntityState::from_deleted_at(None);
        assert_eq!(state, EntityState::Active);
        assert!(state.is_visible());
        assert!(state.deleted_at().is_none());
    }

    #[test]
    fn test_deleted_from_timestamp() {
        let at = Utc::now();
        let state = EntityState::from_deleted_at(Some(at));
        assert_eq!(state, EntityState::Deleted { at });
        assert!(!state.is_visible());
        assert_eq!(state.deleted_at(), Some(at));
    }

    #[test]
    fn test_deleted_is_terminal_shape() {
        // There is no constructor back to Active from a deleted timestamp;
        // re-adding an entity means a fresh row with a fresh ID.
        let at = Utc::now();
        let state = EntityState::from_deleted_at(Some(at));
        assert!(matches!(state, EntityState::Deleted { .. }));
    }
}

//! Integration tests for soft-delete state semantics.

use brewbox_core::EntityState;

#[test]
fn test_missing_deleted_at_means_active() {
    let state = EntityState::from_deleted_at(None);
    assert_eq!(state, EntityState::Active);
    assert!(state.is_visible());
    assert!(state.deleted_at().is_none());
}

#[test]
fn test_present_deleted_at_means_deleted() {
    let at = chrono::Utc::now();
    let state = EntityState::from_deleted_at(Some(at));
    assert!(!state.is_visible());
    assert_eq!(state.deleted_at(), Some(at));
}

#[test]
fn test_state_serializes_with_tag() {
    let active = serde_json::to_value(EntityState::Active).expect("serializes");
    assert_eq!(active["state"], "active");

    let at = chrono::Utc::now();
    let deleted = serde_json::to_value(EntityState::from_deleted_at(Some(at))).expect("serializes");
    assert_eq!(deleted["state"], "deleted");
}

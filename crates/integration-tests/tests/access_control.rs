//! Integration tests for the shop management decision matrix.
//!
//! The decision function is pure over three facts, so the whole matrix can be
//! enumerated without a database.

use brewbox_api::services::access_control::{
    AccessDecision, NOT_AN_ADMIN, NOT_A_WORKER, decide,
};
use brewbox_core::Role;

// =============================================================================
// Decision Matrix
// =============================================================================

#[test]
fn test_creator_is_allowed_regardless_of_role_and_membership() {
    for role in [Role::Admin, Role::Member] {
        for has_membership in [true, false] {
            assert_eq!(
                decide(true, role, has_membership),
                AccessDecision::Allow,
                "creator must always be allowed ({role:?}, membership={has_membership})"
            );
        }
    }
}

#[test]
fn test_admin_with_active_membership_is_allowed() {
    assert_eq!(decide(false, Role::Admin, true), AccessDecision::Allow);
}

#[test]
fn test_admin_without_active_membership_is_denied() {
    // Admin role alone is necessary but not sufficient.
    assert_eq!(
        decide(false, Role::Admin, false),
        AccessDecision::Deny(NOT_AN_ADMIN)
    );
}

#[test]
fn test_member_is_denied_regardless_of_membership() {
    for has_membership in [true, false] {
        assert_eq!(
            decide(false, Role::Member, has_membership),
            AccessDecision::Deny(NOT_AN_ADMIN),
            "member must be denied (membership={has_membership})"
        );
    }
}

#[test]
fn test_exactly_four_of_eight_fact_combinations_allow() {
    let mut allowed = 0;
    for is_creator in [true, false] {
        for role in [Role::Admin, Role::Member] {
            for has_membership in [true, false] {
                if decide(is_creator, role, has_membership).is_allowed() {
                    allowed += 1;
                }
            }
        }
    }
    // 4 creator combinations + admin-with-membership = 5.
    assert_eq!(allowed, 5);
}

// =============================================================================
// Deny Messages
// =============================================================================

#[test]
fn test_deny_messages_are_stable() {
    // These strings are part of the API contract; clients match on them.
    assert_eq!(NOT_AN_ADMIN, "user is not an admin for this coffee shop");
    assert_eq!(NOT_A_WORKER, "user is not a worker for this coffee shop");
}

// =============================================================================
// Role Semantics
// =============================================================================

#[test]
fn test_role_parsing_round_trip() {
    use std::str::FromStr;

    assert_eq!(Role::from_str("admin").expect("admin parses"), Role::Admin);
    assert_eq!(
        Role::from_str("member").expect("member parses"),
        Role::Member
    );
    assert!(Role::from_str("barista").is_err());

    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Member.to_string(), "member");
}

#[test]
fn test_default_role_is_member() {
    assert_eq!(Role::default(), Role::Member);
    assert!(!Role::default().is_admin());
}

//! Integration tests for the shared pagination convention.
//!
//! Every list endpoint clamps identically: limit in (0, 50] defaulting to
//! 25, zero-based page, offset = page * limit.

use brewbox_core::{PageParams, PageQuery};

#[test]
fn test_defaults_apply_when_nothing_is_requested() {
    let params = PageQuery::default().clamped();
    assert_eq!(params.page(), 0);
    assert_eq!(params.limit(), 25);
    assert_eq!(params.offset(), 0);
}

#[test]
fn test_in_range_values_pass_through() {
    let params = PageQuery {
        page: Some(3),
        limit: Some(10),
    }
    .clamped();
    assert_eq!(params.page(), 3);
    assert_eq!(params.limit(), 10);
    assert_eq!(params.offset(), 30);
}

#[test]
fn test_zero_and_negative_limits_fall_back_to_default() {
    for limit in [0, -1, -25] {
        let params = PageParams::new(0, limit);
        assert_eq!(params.limit(), 25, "limit {limit} must fall back to 25");
    }
}

#[test]
fn test_oversized_limit_falls_back_to_default_not_max() {
    // Out-of-range means the default, not a clamp to the maximum.
    let params = PageParams::new(0, 51);
    assert_eq!(params.limit(), 25);

    let params = PageParams::new(0, 9999);
    assert_eq!(params.limit(), 25);
}

#[test]
fn test_max_limit_is_inclusive() {
    let params = PageParams::new(0, PageParams::MAX_LIMIT);
    assert_eq!(params.limit(), 50);
}

#[test]
fn test_negative_page_clamps_to_first_page() {
    let params = PageParams::new(-7, 10);
    assert_eq!(params.page(), 0);
    assert_eq!(params.offset(), 0);
}

#[test]
fn test_offset_scales_with_clamped_limit() {
    // Page 2 with an invalid limit uses the default limit for the offset.
    let params = PageParams::new(2, 0);
    assert_eq!(params.offset(), 50);
}

#[test]
fn test_query_deserializes_from_url_shape() {
    let query: PageQuery =
        serde_json::from_str(r#"{"page": 1, "limit": 30}"#).expect("valid query");
    let params = query.clamped();
    assert_eq!(params.page(), 1);
    assert_eq!(params.limit(), 30);
}

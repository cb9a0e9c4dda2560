//! Pagination parameters with uniform clamping.
//!
//! Every list endpoint uses the same convention: a zero-based page and a
//! limit in `(0, 50]` defaulting to 25 when out of range. Offsets are always
//! `page * limit`.

use serde::Deserialize;

/// Clamped pagination parameters.
///
/// Construct via [`PageParams::new`], which applies the clamps; the fields
/// are private so unclamped values cannot reach a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
    limit: i64,
}

impl PageParams {
    /// Limit applied when the requested limit is out of range.
    pub const DEFAULT_LIMIT: i64 = 25;
    /// Largest limit a caller may request.
    pub const MAX_LIMIT: i64 = 50;

    /// Create pagination parameters, clamping out-of-range values.
    ///
    /// A limit outside `(0, 50]` becomes 25; a negative page becomes 0.
    #[must_use]
    pub const fn new(page: i64, limit: i64) -> Self {
        let limit = if limit <= 0 || limit > Self::MAX_LIMIT {
            Self::DEFAULT_LIMIT
        } else {
            limit
        };
        let page = if page < 0 { 0 } else { page };
        Self { page, limit }
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset for SQL queries.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page * self.limit
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

/// Raw pagination query string, as bound from `?page=&limit=`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page (zero-based).
    pub page: Option<i64>,
    /// Requested items per page.
    pub limit: Option<i64>,
}

impl PageQuery {
    /// Clamp the raw query into usable parameters.
    #[must_use]
    pub fn clamped(self) -> PageParams {
        PageParams::new(self.page.unwrap_or(0), self.limit.unwrap_or(0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_zero_defaults_to_25() {
        let params = PageParams::new(0, 0);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_limit_over_max_defaults_to_25() {
        let params = PageParams::new(0, 999);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_limit_at_max_is_kept() {
        let params = PageParams::new(0, 50);
        assert_eq!(params.limit(), 50);
    }

    #[test]
    fn test_negative_page_clamps_to_zero() {
        let params = PageParams::new(-1, 10);
        assert_eq!(params.page(), 0);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_is_page_times_limit() {
        let params = PageParams::new(3, 10);
        assert_eq!(params.offset(), 30);
    }

    #[test]
    fn test_query_with_no_values_uses_defaults() {
        let params = PageQuery::default().clamped();
        assert_eq!(params.page(), 0);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_query_passthrough_in_range() {
        let query = PageQuery {
            page: Some(2),
            limit: Some(40),
        };
        let params = query.clamped();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 40);
        assert_eq!(params.offset(), 80);
    }
}

//! Offset-based pagination for post listings.
//!
//! Post ids are time-ordered v7 UUIDs, so `ORDER BY id DESC` gives a stable
//! newest-first ordering: concurrent inserts land at the front and never
//! reorder pages that have already been returned.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `page`/`limit` query parameters.
///
/// Kept as strings so that non-numeric values normalize to the defaults
/// instead of failing query deserialization with a client error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageRequest {
    /// Normalize to `(page, limit)`.
    ///
    /// Absent, non-numeric, and non-positive values fall back to the
    /// defaults (1, 10); negative skip/take never reach the database.
    pub fn normalize(&self) -> (i64, i64) {
        let page = parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        (page, limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
}

/// Computed window and metadata for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: i64,
    pub take: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Compute the window for `page`/`limit` over `total_count` rows.
///
/// Callers must pass normalized inputs (`page >= 1`, `limit >= 1`).
/// An empty collection yields zero pages with both flags false.
/// Arithmetic saturates so extreme query values cannot overflow into a
/// negative skip.
pub fn paginate(page: i64, limit: i64, total_count: i64) -> PageWindow {
    let total_pages = if total_count == 0 {
        0
    } else {
        total_count.saturating_add(limit - 1) / limit
    };

    PageWindow {
        skip: (page - 1).saturating_mul(limit),
        take: limit,
        current_page: page,
        total_pages,
        total_count,
        has_next_page: page < total_pages,
        has_previous_page: total_count > 0 && page > 1,
    }
}

/// Wire shape for pagination metadata in list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl From<&PageWindow> for PageInfo {
    fn from(window: &PageWindow) -> Self {
        PageInfo {
            current_page: window.current_page,
            total_pages: window.total_pages,
            total_count: window.total_count,
            has_next_page: window.has_next_page,
            has_previous_page: window.has_previous_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page() {
        let window = paginate(2, 10, 25);
        assert_eq!(window.skip, 10);
        assert_eq!(window.take, 10);
        assert_eq!(window.total_pages, 3);
        assert!(window.has_next_page);
        assert!(window.has_previous_page);
    }

    #[test]
    fn test_empty_collection() {
        let window = paginate(1, 10, 0);
        assert_eq!(window.total_pages, 0);
        assert!(!window.has_next_page);
        assert!(!window.has_previous_page);
    }

    #[test]
    fn test_first_page() {
        let window = paginate(1, 10, 25);
        assert_eq!(window.skip, 0);
        assert!(window.has_next_page);
        assert!(!window.has_previous_page);
    }

    #[test]
    fn test_last_page() {
        let window = paginate(3, 10, 25);
        assert_eq!(window.skip, 20);
        assert!(!window.has_next_page);
        assert!(window.has_previous_page);
    }

    #[test]
    fn test_exact_multiple() {
        let window = paginate(2, 10, 20);
        assert_eq!(window.total_pages, 2);
        assert!(!window.has_next_page);
    }

    #[test]
    fn test_normalize_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.normalize(), (1, 10));
    }

    #[test]
    fn test_normalize_valid_values() {
        let request = PageRequest {
            page: Some("3".to_string()),
            limit: Some("20".to_string()),
        };
        assert_eq!(request.normalize(), (3, 20));
    }

    #[test]
    fn test_normalize_non_numeric() {
        let request = PageRequest {
            page: Some("abc".to_string()),
            limit: Some("1.5".to_string()),
        };
        assert_eq!(request.normalize(), (1, 10));
    }

    #[test]
    fn test_extreme_page_and_limit() {
        let request = PageRequest {
            page: Some(i64::MAX.to_string()),
            limit: Some(i64::MAX.to_string()),
        };
        let (page, limit) = request.normalize();

        let window = paginate(page, limit, 25);
        assert!(window.skip >= 0);
        assert_eq!(window.take, limit);
        assert_eq!(window.total_pages, 1);
        assert!(!window.has_next_page);
        assert!(window.has_previous_page);
    }

    #[test]
    fn test_normalize_non_positive() {
        let request = PageRequest {
            page: Some("0".to_string()),
            limit: Some("-5".to_string()),
        };
        assert_eq!(request.normalize(), (1, 10));
    }
}

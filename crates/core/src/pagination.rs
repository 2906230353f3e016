//! Offset pagination over the posts table.
//!
//! Query parameters arrive as raw strings. They are never rejected: anything
//! that is not an integer >= 1 falls back to the default, and `limit` is
//! clamped to [`MAX_PAGE_LIMIT`].

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::Post;

/// Normalized `page`/`limit` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Builds a request from already-validated numbers, applying the same
    /// floor and cap as [`PageRequest::from_params`].
    #[must_use]
    pub fn new(page: u64, limit: u64) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page };
        let limit = if limit < 1 { DEFAULT_PAGE_LIMIT } else { limit.min(MAX_PAGE_LIMIT) };
        Self { page, limit }
    }

    /// Normalizes raw query-string values.
    #[must_use]
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit).unwrap_or(DEFAULT_PAGE_LIMIT);
        Self::new(page, limit)
    }

    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Rows to skip before this page. Saturates for absurdly large pages.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_PAGE_LIMIT }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    let value: i64 = raw?.parse().ok()?;
    u64::try_from(value).ok().filter(|v| *v >= 1)
}

/// Pagination metadata returned alongside a page of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub count: u64,
    pub pages: u64,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl Pagination {
    /// Derives page count and neighbours from the total row count.
    #[must_use]
    pub fn new(request: PageRequest, count: u64) -> Self {
        let page = request.page();
        let limit = request.limit();
        let pages = count.div_ceil(limit);
        let prev_page = if page > 1 { Some(page - 1) } else { None };
        let next_page = if page < pages { Some(page + 1) } else { None };
        Self { page, limit, count, pages, prev_page, next_page }
    }
}

/// One page of posts, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        let req = PageRequest::from_params(None, None);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 12);
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn page_below_one_is_normalized_to_one() {
        for raw in ["0", "-1", "-9999"] {
            assert_eq!(PageRequest::from_params(Some(raw), None).page(), 1, "page={raw}");
        }
    }

    #[test]
    fn limit_below_one_is_normalized_to_default() {
        for raw in ["0", "-5"] {
            assert_eq!(PageRequest::from_params(None, Some(raw)).limit(), 12, "limit={raw}");
        }
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let req = PageRequest::from_params(Some("abc"), Some("1.5"));
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 12);

        let req = PageRequest::from_params(Some(""), Some(" 3"));
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 12);

        let req = PageRequest::from_params(Some("99999999999999999999"), None);
        assert_eq!(req.page(), 1);
    }

    #[test]
    fn valid_values_are_kept() {
        let req = PageRequest::from_params(Some("3"), Some("25"));
        assert_eq!(req.page(), 3);
        assert_eq!(req.limit(), 25);
        assert_eq!(req.offset(), 50);
    }

    #[test]
    fn limit_is_capped() {
        let req = PageRequest::from_params(None, Some("100000"));
        assert_eq!(req.limit(), MAX_PAGE_LIMIT);
        assert_eq!(PageRequest::new(1, MAX_PAGE_LIMIT + 1).limit(), MAX_PAGE_LIMIT);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let req = PageRequest::new(u64::MAX, MAX_PAGE_LIMIT);
        assert_eq!(req.offset(), u64::MAX);
    }

    #[test]
    fn pages_is_ceiling_of_count_over_limit() {
        for limit in 1..=20_u64 {
            for count in 0..=100_u64 {
                let meta = Pagination::new(PageRequest::new(1, limit), count);
                let expected = (count + limit - 1) / limit;
                assert_eq!(meta.pages, expected, "count={count} limit={limit}");
            }
        }
    }

    #[test]
    fn prev_and_next_follow_page_bounds() {
        for page in 1..=5_u64 {
            let meta = Pagination::new(PageRequest::new(page, 10), 35);
            assert_eq!(meta.prev_page, (page > 1).then(|| page - 1), "page={page}");
            assert_eq!(meta.next_page, (page < meta.pages).then(|| page + 1), "page={page}");
        }
    }

    #[test]
    fn twenty_five_rows_in_pages_of_twelve() {
        let first = Pagination::new(PageRequest::new(1, 12), 25);
        assert_eq!(first.pages, 3);
        assert_eq!(first.prev_page, None);
        assert_eq!(first.next_page, Some(2));

        let last = Pagination::new(PageRequest::new(3, 12), 25);
        assert_eq!(last.prev_page, Some(2));
        assert_eq!(last.next_page, None);
    }

    #[test]
    fn empty_table_has_no_pages() {
        let meta = Pagination::new(PageRequest::default(), 0);
        assert_eq!(meta.pages, 0);
        assert_eq!(meta.prev_page, None);
        assert_eq!(meta.next_page, None);
    }

    #[test]
    fn page_past_the_end_points_back_but_not_forward() {
        let meta = Pagination::new(PageRequest::new(9, 12), 25);
        assert_eq!(meta.prev_page, Some(8));
        assert_eq!(meta.next_page, None);
    }

    #[test]
    fn absent_neighbours_serialize_as_null() {
        let meta = Pagination::new(PageRequest::default(), 0);
        let json = serde_json::to_value(meta).unwrap();
        assert!(json["prev_page"].is_null());
        assert!(json["next_page"].is_null());
        assert_eq!(json["limit"], 12);
    }
}

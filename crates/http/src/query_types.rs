//! Request/query types

use sample_crud_core::PageRequest;

/// Raw `page`/`limit` query parameters for the post listing.
///
/// Built from the decoded query pairs rather than a typed `Deserialize` so
/// that repeated keys or junk values never turn into a 400; the first
/// occurrence of each key wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PostsQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "limit" if query.limit.is_none() => query.limit = Some(value),
                _ => {},
            }
        }
        query
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(self.page.as_deref(), self.limit.as_deref())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `posts` table.
///
/// Rows are written by other systems; this crate only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    #[must_use]
    pub fn new(id: i64, title: String, content: String, created_at: DateTime<Utc>) -> Self {
        Self { id, title, content, created_at }
    }
}

//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sample_crud_core::Post;

use crate::MemoryStorage;

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
}

/// Post `id` created `id` minutes after [`base_time`], so higher ids are newer.
pub fn create_test_post(id: i64) -> Post {
    Post::new(
        id,
        format!("Post {id}"),
        format!("Content of post {id}"),
        base_time() + Duration::minutes(id),
    )
}

pub fn create_test_storage(count: i64) -> MemoryStorage {
    MemoryStorage::with_posts((1..=count).map(create_test_post))
}

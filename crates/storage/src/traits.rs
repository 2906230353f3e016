//! Storage backend trait abstraction
//!
//! Handlers and services depend on [`PostStore`] rather than a concrete
//! database, so the pool is injected at startup and tests can swap in
//! [`crate::MemoryStorage`].

use async_trait::async_trait;
use sample_crud_core::Post;

use crate::error::StorageError;

/// Read access to the `posts` table.
///
/// Every listing is ordered newest first (`created_at` descending, ties broken
/// by `id` descending).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Total number of posts.
    async fn count_posts(&self) -> Result<u64, StorageError>;

    /// Up to `limit` posts after skipping `offset` rows.
    async fn list_posts(&self, offset: u64, limit: u64) -> Result<Vec<Post>, StorageError>;

    /// Single post by primary key.
    async fn get_post(&self, id: i64) -> Result<Option<Post>, StorageError>;
}

//! In-process post storage.
//!
//! Applies the same ordering as the MySQL backend. Used by tests and by
//! callers that want to exercise the API without a database.

use std::cmp::Reverse;

use async_trait::async_trait;
use sample_crud_core::Post;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::PostStore;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    posts: RwLock<Vec<Post>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut posts: Vec<Post> = posts.into_iter().collect();
        sort_newest_first(&mut posts);
        Self { posts: RwLock::new(posts) }
    }

    pub async fn insert(&self, post: Post) {
        let mut posts = self.posts.write().await;
        posts.push(post);
        sort_newest_first(&mut posts);
    }
}

fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_key(|p| Reverse((p.created_at, p.id)));
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl PostStore for MemoryStorage {
    async fn count_posts(&self) -> Result<u64, StorageError> {
        let posts = self.posts.read().await;
        Ok(u64::try_from(posts.len()).unwrap_or(u64::MAX))
    }

    async fn list_posts(&self, offset: u64, limit: u64) -> Result<Vec<Post>, StorageError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().skip(to_index(offset)).take(to_index(limit)).cloned().collect())
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, StorageError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }
}

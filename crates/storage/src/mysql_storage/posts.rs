//! PostStore implementation for MySqlStorage.

use async_trait::async_trait;
use sample_crud_core::Post;

use super::{MySqlStorage, POST_COLUMNS};
use crate::error::StorageError;
use crate::traits::PostStore;

#[async_trait]
impl PostStore for MySqlStorage {
    async fn count_posts(&self) -> Result<u64, StorageError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts").fetch_one(&self.pool).await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn list_posts(&self, offset: u64, limit: u64) -> Result<Vec<Post>, StorageError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        );
        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, StorageError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?");
        let post = sqlx::query_as::<_, Post>(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(post)
    }
}

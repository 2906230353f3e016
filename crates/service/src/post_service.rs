use std::sync::Arc;

use sample_crud_core::{PageRequest, Pagination, Post, PostPage};
use sample_crud_storage::PostStore;

use crate::ServiceError;

pub struct PostService {
    storage: Arc<dyn PostStore>,
}

impl PostService {
    #[must_use]
    pub fn new(storage: Arc<dyn PostStore>) -> Self {
        Self { storage }
    }

    /// Count, then fetch the requested page. Both reads hit the same table
    /// without a shared snapshot, so a concurrent insert can make `count`
    /// and `posts` disagree by a row.
    pub async fn list_posts(&self, request: PageRequest) -> Result<PostPage, ServiceError> {
        let count = self.storage.count_posts().await?;
        let posts = self.storage.list_posts(request.offset(), request.limit()).await?;
        let pagination = Pagination::new(request, count);
        tracing::debug!(
            page = pagination.page,
            limit = pagination.limit,
            count = pagination.count,
            returned = posts.len(),
            "listed posts"
        );
        Ok(PostPage { posts, pagination })
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ServiceError> {
        self.storage
            .get_post(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound { entity: "post", id: id.to_string() })
    }
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use sample_crud_core::{Post, PostPage};

use crate::api_error::ApiError;
use crate::query_types::PostsQuery;
use crate::AppState;

/// `GET /posts?page=&limit=`: one page of posts, newest first.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<PostPage>, ApiError> {
    let request = PostsQuery::from_pairs(params).page_request();
    let page = state.post_service.list_posts(request).await?;
    Ok(Json(page))
}

/// `GET /posts/{id}`
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id: i64 =
        id.parse().map_err(|_| ApiError::BadRequest(format!("invalid post id '{id}'")))?;
    let post = state.post_service.get_post(id).await?;
    Ok(Json(post))
}

//! HTTP API server for sample-crud.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    http::{header, Method},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sample_crud_service::PostService;

pub use query_types::PostsQuery;
pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Built once at startup with an injected storage backend and wrapped in
/// `Arc` for sharing across concurrent requests.
pub struct AppState {
    /// Service for listing and fetching posts
    pub post_service: Arc<PostService>,
}

impl AppState {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }
}

/// Routes for the bare `/posts` layout and the `/api` and `/api-go`
/// prefixed layouts used behind the reverse proxy.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/posts", get(handlers::posts::list_posts))
        .route("/posts/{id}", get(handlers::posts::get_post))
        .route("/api/posts", get(handlers::posts::list_posts))
        .route("/api/posts/{id}", get(handlers::posts::get_post))
        .route("/api-go/posts", get(handlers::posts::list_posts))
        .route("/api-go/posts/{id}", get(handlers::posts::get_post))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

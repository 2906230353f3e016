//! Service layer for sample-crud
//!
//! Sits between the HTTP handlers and storage: turns a normalized page request
//! into a count plus one page of posts.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod post_service;

pub use error::ServiceError;
pub use post_service::PostService;

//! Core types for sample-crud
//!
//! Domain types and pagination rules shared across all other crates.

mod constants;
mod env_config;
mod pagination;
mod post;

pub use constants::*;
pub use env_config::*;
pub use pagination::*;
pub use post::*;

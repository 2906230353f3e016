//! Storage layer for sample-crud
//!
//! Read-only access to the `posts` table. MySQL via sqlx in production,
//! an in-process store for tests.

mod error;
mod memory;
mod mysql_migrations;
mod mysql_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use mysql_migrations::run_mysql_migrations;
pub use mysql_storage::MySqlStorage;
pub use sqlx::Error as SqlxError;
pub use traits::PostStore;

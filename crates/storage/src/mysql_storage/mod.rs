//! MySQL storage backend using sqlx.

mod posts;

use std::time::Duration;

use sample_crud_core::{
    DatabaseConfig, MYSQL_POOL_ACQUIRE_TIMEOUT_SECS, MYSQL_POOL_IDLE_TIMEOUT_SECS,
    MYSQL_POOL_MAX_CONNECTIONS,
};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::error::StorageError;
use crate::mysql_migrations::run_mysql_migrations;

pub(crate) const POST_COLUMNS: &str =
    "id, COALESCE(title, '') AS title, COALESCE(content, '') AS content, created_at";

#[derive(Clone, Debug)]
pub struct MySqlStorage {
    pool: MySqlPool,
}

impl MySqlStorage {
    /// Opens the pool and verifies a connection can be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);
        let pool = MySqlPoolOptions::new()
            .max_connections(MYSQL_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(MYSQL_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(MYSQL_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;
        tracing::info!(database = %config.redacted_url(), "MySqlStorage initialized");
        Ok(Self { pool })
    }

    /// Wraps an existing pool, e.g. one shared with another component.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Creates the `posts` table when it does not exist yet.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        run_mysql_migrations(&self.pool).await
    }
}

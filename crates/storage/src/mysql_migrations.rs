//! MySQL schema migrations for sample-crud storage.

use sqlx::MySqlPool;

use crate::error::StorageError;

/// Run all MySQL migrations.
///
/// MySQL has no `CREATE INDEX IF NOT EXISTS`, so the listing index is declared
/// inline with the table.
pub async fn run_mysql_migrations(pool: &MySqlPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGINT NOT NULL AUTO_INCREMENT,
            title VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            created_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
            updated_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6)
                ON UPDATE CURRENT_TIMESTAMP(6),
            PRIMARY KEY (id),
            INDEX idx_posts_created_id (created_at, id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    tracing::info!("MySQL migrations applied");
    Ok(())
}

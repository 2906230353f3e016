//! Integration tests for MySqlStorage.
//! Run with: DATABASE_URL=mysql://root@127.0.0.1:3306 cargo test -p sample-crud-storage -- --ignored mysql_
//!
//! Each test creates and drops its own scratch database.

#![allow(clippy::unwrap_used, reason = "integration test code")]

use std::time::{SystemTime, UNIX_EPOCH};

use sample_crud_storage::{MySqlStorage, PostStore};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Executor, MySqlPool};

struct Scratch {
    admin: MySqlPool,
    name: String,
    storage: MySqlStorage,
}

impl Scratch {
    async fn new() -> Self {
        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set for MySqlStorage integration tests");
        let options: MySqlConnectOptions = url.parse().unwrap();
        let admin =
            MySqlPoolOptions::new().max_connections(1).connect_with(options.clone()).await.unwrap();

        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let name = format!("sample_crud_test_{}_{nanos}", std::process::id());
        admin.execute(format!("CREATE DATABASE `{name}`").as_str()).await.unwrap();

        let pool = MySqlPoolOptions::new()
            .max_connections(2)
            .connect_with(options.database(&name))
            .await
            .unwrap();
        let storage = MySqlStorage::from_pool(pool);
        storage.migrate().await.unwrap();
        Self { admin, name, storage }
    }

    async fn seed(&self, count: usize) {
        for i in 0..count {
            sqlx::query(
                "INSERT INTO posts (title, content, created_at)
                   VALUES (?, ?, TIMESTAMPADD(MINUTE, ?, '2024-01-01 00:00:00'))",
            )
            .bind(format!("Post {i}"))
            .bind(format!("Content {i}"))
            .bind(i64::try_from(i).unwrap())
            .execute(self.storage.pool())
            .await
            .unwrap();
        }
    }

    async fn teardown(self) {
        self.storage.pool().close().await;
        self.admin.execute(format!("DROP DATABASE `{}`", self.name).as_str()).await.unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn mysql_empty_table() {
    let db = Scratch::new().await;
    assert_eq!(db.storage.count_posts().await.unwrap(), 0);
    assert!(db.storage.list_posts(0, 12).await.unwrap().is_empty());
    db.teardown().await;
}

#[tokio::test]
#[ignore]
async fn mysql_pages_are_newest_first() {
    let db = Scratch::new().await;
    db.seed(25).await;

    assert_eq!(db.storage.count_posts().await.unwrap(), 25);

    let first = db.storage.list_posts(0, 12).await.unwrap();
    assert_eq!(first.len(), 12);
    assert_eq!(first[0].title, "Post 24");
    assert!(first.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let last = db.storage.list_posts(24, 12).await.unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].title, "Post 0");

    assert_eq!(db.storage.list_posts(0, 12).await.unwrap(), first);
    db.teardown().await;
}

#[tokio::test]
#[ignore]
async fn mysql_get_post_by_id() {
    let db = Scratch::new().await;
    db.seed(1).await;

    let listed = db.storage.list_posts(0, 1).await.unwrap();
    let id = listed[0].id;
    assert_eq!(db.storage.get_post(id).await.unwrap(), Some(listed[0].clone()));
    assert_eq!(db.storage.get_post(id + 1000).await.unwrap(), None);
    db.teardown().await;
}

#[tokio::test]
#[ignore]
async fn mysql_migration_is_idempotent() {
    let db = Scratch::new().await;
    db.storage.migrate().await.unwrap();
    db.teardown().await;
}

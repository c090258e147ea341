//! Helpers shared by the integration tests.

#![allow(dead_code)]

use di::Ref;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tokio_echo_chat_api::infrastructure::database::{self, DatabaseConnection};
use tokio_echo_chat_api::infrastructure::repositories::DbConversationRepository;

/// Fresh in-memory database with migrations applied.
///
/// A single connection keeps the database alive for the lifetime of the pool.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    database::migrate(&pool).await.unwrap();
    pool
}

pub fn repository(pool: &SqlitePool) -> DbConversationRepository {
    DbConversationRepository::new(Ref::new(DatabaseConnection::from_pool(pool.clone())))
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

use std::str::FromStr;

use gamecoll_db::DbPool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// A fresh in-memory database with all migrations applied.
///
/// Limited to a single connection that is never recycled: every connection
/// to `sqlite::memory:` would otherwise see its own empty database.
pub async fn test_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    gamecoll_db::run_migrations(&pool).await.unwrap();
    pool
}

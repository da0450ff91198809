//! # Database Connection
//!
//! SQLite-backed substrate handle. `DbConnection` owns the connection pool,
//! creates the schema on first use and hands out repositories. The handle is
//! explicit: hosts call `init` (or `new` for a custom location) at startup
//! and `close` at shutdown, and nothing in the store reaches for ambient
//! global state.

use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::storage::repositories::ReceiptRepository;
use crate::storage::traits::Connection;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:xpense.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection with the given URL
    pub async fn new(database_url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePool::connect(database_url).await?;

        let connection = Self {
            pool: Arc::new(pool),
        };

        connection.setup_schema().await?;

        Ok(connection)
    }

    /// Initialize the production database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name so parallel tests
    /// cannot see each other's data
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string().replace("-", "");
        let database_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);
        Self::new(&database_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the underlying pool.
    ///
    /// After this returns, every operation on repositories created from this
    /// connection fails with a persistence error. Intended for host shutdown
    /// and for tests that exercise substrate failure.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the receipts table and its indexes if they do not exist.
    ///
    /// `seq` records creation order. AUTOINCREMENT guarantees values are
    /// never reused after a delete, so "reverse creation order" stays stable
    /// for the lifetime of the database file.
    async fn setup_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS receipts (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                timestamp TEXT NOT NULL,
                amount TEXT NOT NULL,
                image BLOB NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        // Matches the canonical listing order so loads stay index-driven.
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_receipts_timestamp
            ON receipts(timestamp DESC, seq DESC)
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type ReceiptRepository = ReceiptRepository;

    fn create_receipt_repository(&self) -> Self::ReceiptRepository {
        ReceiptRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::receipt::Receipt;
    use crate::storage::traits::ReceiptStorage;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_receipt() -> Receipt {
        Receipt {
            id: Uuid::new_v4(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            amount: "19.75".parse().unwrap(),
            image: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }
    }

    #[tokio::test]
    async fn test_init_test_databases_are_isolated() {
        let first = DbConnection::init_test().await.unwrap();
        let second = DbConnection::init_test().await.unwrap();

        first
            .create_receipt_repository()
            .store_receipt(&sample_receipt())
            .await
            .unwrap();

        let first_count = first
            .create_receipt_repository()
            .load_all_receipts()
            .await
            .unwrap()
            .len();
        let second_count = second
            .create_receipt_repository()
            .load_all_receipts()
            .await
            .unwrap()
            .len();

        assert_eq!(first_count, 1);
        assert_eq!(second_count, 0);
    }

    #[tokio::test]
    async fn test_file_backed_database_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = format!("sqlite:{}/receipts.db", dir.path().display());
        let receipt = sample_receipt();

        let first = DbConnection::new(&database_url).await.unwrap();
        first
            .create_receipt_repository()
            .store_receipt(&receipt)
            .await
            .unwrap();
        first.close().await;

        let second = DbConnection::new(&database_url).await.unwrap();
        let loaded = second
            .create_receipt_repository()
            .load_all_receipts()
            .await
            .unwrap();

        assert_eq!(loaded, vec![receipt]);
    }

    #[tokio::test]
    async fn test_operations_fail_after_close() {
        let connection = DbConnection::init_test().await.unwrap();
        let repository = connection.create_receipt_repository();

        connection.close().await;

        assert!(repository.load_all_receipts().await.is_err());
        assert!(repository.store_receipt(&sample_receipt()).await.is_err());
    }
}

//! # Receipt Repository
//!
//! SQLite implementation of the receipt persistence contract. Values are
//! stored in lossless text encodings: ids as canonical UUID strings, amounts
//! as plain decimal strings and timestamps as fixed-precision RFC 3339 in
//! UTC, so lexicographic order on the timestamp column equals chronological
//! order. Image bytes go into a BLOB column untouched.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::models::receipt::Receipt;
use crate::storage::connection::DbConnection;
use crate::storage::traits::ReceiptStorage;

/// Repository for receipt operations
#[derive(Clone)]
pub struct ReceiptRepository {
    connection: DbConnection,
}

impl ReceiptRepository {
    /// Create a new repository backed by the given connection
    pub fn new(connection: DbConnection) -> Self {
        Self { connection }
    }

    /// Canonical text encoding for timestamps: UTC, microsecond precision,
    /// `Z` suffix. Fixed precision keeps the column lexicographically
    /// ordered by instant.
    fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Decode one database row into a domain receipt.
    ///
    /// Stored text that no longer parses means the row is corrupt; that is
    /// reported as an error, never papered over with a default value.
    fn row_to_receipt(row: &SqliteRow) -> Result<Receipt> {
        let id: String = row.get("id");
        let timestamp: String = row.get("timestamp");
        let amount: String = row.get("amount");
        let image: Vec<u8> = row.get("image");

        Ok(Receipt {
            id: Uuid::parse_str(&id)
                .map_err(|e| anyhow!("Invalid receipt id '{}' in store: {}", id, e))?,
            timestamp: DateTime::parse_from_rfc3339(&timestamp)
                .map_err(|e| anyhow!("Invalid receipt timestamp '{}' in store: {}", timestamp, e))?
                .with_timezone(&Utc),
            amount: Decimal::from_str(&amount)
                .map_err(|e| anyhow!("Invalid receipt amount '{}' in store: {}", amount, e))?,
            image,
        })
    }
}

#[async_trait]
impl ReceiptStorage for ReceiptRepository {
    async fn store_receipt(&self, receipt: &Receipt) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO receipts (id, timestamp, amount, image)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(receipt.id.to_string())
        .bind(Self::encode_timestamp(&receipt.timestamp))
        .bind(receipt.amount.to_string())
        .bind(&receipt.image)
        .execute(self.connection.pool())
        .await?;

        Ok(())
    }

    async fn load_all_receipts(&self) -> Result<Vec<Receipt>> {
        let rows = sqlx::query(
            r#"
            SELECT id, timestamp, amount, image
            FROM receipts
            ORDER BY timestamp DESC, seq DESC
            "#,
        )
        .fetch_all(self.connection.pool())
        .await?;

        rows.iter().map(Self::row_to_receipt).collect()
    }

    async fn delete_receipt(&self, receipt_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM receipts WHERE id = ?")
            .bind(receipt_id.to_string())
            .execute(self.connection.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! Domain model for a receipt.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model representing a single logged receipt.
///
/// A receipt is immutable once created: the only lifecycle transitions are
/// creation and deletion. For any record that reached storage, `amount` is
/// strictly positive and `image` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identity assigned at creation
    pub id: Uuid,
    /// Creation instant in UTC. Listings order by this field, most recent first
    pub timestamp: DateTime<Utc>,
    /// Claimed amount at the exact precision the user entered
    pub amount: Decimal,
    /// Photograph bytes, carried inline with the record
    pub image: Vec<u8>,
}

impl Receipt {
    /// Capture a creation instant at microsecond precision.
    ///
    /// The persistence layer encodes timestamps at microsecond precision, so
    /// truncating here keeps a freshly created record identical to what a
    /// later load returns.
    pub fn creation_timestamp() -> DateTime<Utc> {
        let now = Utc::now();
        DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
    }
}

/// Errors surfaced by the receipt store's operations.
///
/// `MissingImage` and `MissingAmount` guard the storage boundary against
/// malformed requests. `NotFound` is the recoverable outcome of deleting an
/// id that is not present. `Persistence` wraps a substrate failure and keeps
/// its cause attached for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("A receipt must have an image attached")]
    MissingImage,

    #[error("A receipt must have a positive amount")]
    MissingAmount,

    #[error("No receipt found with id {0}")]
    NotFound(Uuid),

    #[error("Receipt storage failed")]
    Persistence(#[source] anyhow::Error),
}

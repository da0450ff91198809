//! # Storage Traits
//!
//! Defines the persistence substrate contract for the receipt store. The
//! domain layer talks only to these traits, never to a concrete database,
//! which keeps the substrate swappable and the domain logic testable against
//! any implementation.
//!
//! Errors crossing this boundary are `anyhow` errors carrying the underlying
//! cause; the domain layer wraps them into its own error type. Absence is not
//! an error here: deleting an id that does not exist reports `Ok(false)` so
//! callers can tell "nothing to delete" apart from "the delete failed".

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::receipt::Receipt;

/// Trait defining the interface for receipt persistence operations
#[async_trait]
pub trait ReceiptStorage: Send + Sync {
    /// Durably store a complete receipt record, image bytes included.
    ///
    /// The record must be fully persisted when this returns `Ok`; a record
    /// that failed to store must never surface from `load_all_receipts`.
    async fn store_receipt(&self, receipt: &Receipt) -> Result<()>;

    /// Load every stored receipt in canonical order: timestamp descending,
    /// records with equal timestamps in reverse creation order.
    async fn load_all_receipts(&self) -> Result<Vec<Receipt>>;

    /// Delete a receipt by id. Returns true if a record was deleted, false
    /// if no record with that id exists.
    async fn delete_receipt(&self, receipt_id: Uuid) -> Result<bool>;
}

/// Trait defining the interface for storage connections.
///
/// A connection is a cheap handle to the substrate and acts as the factory
/// for its repositories.
pub trait Connection: Send + Sync + Clone {
    type ReceiptRepository: ReceiptStorage + Clone;

    /// Create a receipt repository backed by this connection
    fn create_receipt_repository(&self) -> Self::ReceiptRepository;
}

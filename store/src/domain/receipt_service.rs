//! # Receipt Service
//!
//! The authoritative owner of the receipt collection. Every creation and
//! deletion goes through this service, and every listing or total is pulled
//! fresh from the substrate when asked for. The service keeps no cache of
//! records: what the substrate holds is the truth, so a write that failed is
//! simply never visible.
//!
//! Reads and writes are coordinated through a collection-wide lock.
//! Mutations take the write half; `list_receipts`, `total_amount` and
//! `claim_summary` take the read half. A summary therefore derives its list
//! and its total from one substrate state, never from two.

use log::{error, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared::{ClaimSummaryResponse, CreateReceiptRequest, Receipt as ReceiptDto};

use crate::domain::mappers::ReceiptMapper;
use crate::domain::models::receipt::{Receipt, StoreError};
use crate::storage::{Connection, ReceiptStorage};

/// Domain service for creating, listing, deleting and totalling receipts
#[derive(Clone)]
pub struct ReceiptService<C: Connection> {
    receipt_repository: C::ReceiptRepository,
    /// Serializes mutations and lets each read observe one settled
    /// substrate state
    collection_lock: Arc<RwLock<()>>,
}

impl<C: Connection> ReceiptService<C> {
    /// Create a new service on top of the given storage connection
    pub fn new(connection: Arc<C>) -> Self {
        let receipt_repository = connection.create_receipt_repository();

        Self {
            receipt_repository,
            collection_lock: Arc::new(RwLock::new(())),
        }
    }

    /// Log a new receipt from an already validated capture request.
    ///
    /// The request is still checked defensively: an empty image fails with
    /// `MissingImage` and a non-positive amount with `MissingAmount`, before
    /// anything reaches the substrate. On success the fully persisted record
    /// is returned.
    pub async fn create_receipt(
        &self,
        request: CreateReceiptRequest,
    ) -> Result<ReceiptDto, StoreError> {
        if request.image.is_empty() {
            error!("Rejected receipt with no image bytes");
            return Err(StoreError::MissingImage);
        }

        if request.amount <= Decimal::ZERO {
            error!(
                "Rejected receipt with non-positive amount {}",
                request.amount
            );
            return Err(StoreError::MissingAmount);
        }

        let receipt = Receipt {
            id: Uuid::new_v4(),
            timestamp: Receipt::creation_timestamp(),
            amount: request.amount,
            image: request.image,
        };

        let _guard = self.collection_lock.write().await;

        self.receipt_repository
            .store_receipt(&receipt)
            .await
            .map_err(|e| {
                error!("Failed to store receipt {}: {:#}", receipt.id, e);
                StoreError::Persistence(e)
            })?;

        info!("Stored receipt {} for amount {}", receipt.id, receipt.amount);

        Ok(ReceiptMapper::to_dto(receipt))
    }

    /// List all receipts, most recent first.
    ///
    /// Equal timestamps fall back to reverse creation order, so the listing
    /// is a total order: same records in, same sequence out.
    pub async fn list_receipts(&self) -> Result<Vec<ReceiptDto>, StoreError> {
        let _guard = self.collection_lock.read().await;

        let receipts = self
            .receipt_repository
            .load_all_receipts()
            .await
            .map_err(StoreError::Persistence)?;

        Ok(receipts.into_iter().map(ReceiptMapper::to_dto).collect())
    }

    /// Delete the receipt with the given id.
    ///
    /// Record and image disappear together. Deleting an id that is not
    /// present fails with `NotFound` and changes nothing.
    pub async fn delete_receipt(&self, receipt_id: Uuid) -> Result<(), StoreError> {
        let _guard = self.collection_lock.write().await;

        let deleted = self
            .receipt_repository
            .delete_receipt(receipt_id)
            .await
            .map_err(|e| {
                error!("Failed to delete receipt {}: {:#}", receipt_id, e);
                StoreError::Persistence(e)
            })?;

        if !deleted {
            warn!("No receipt found to delete for id {}", receipt_id);
            return Err(StoreError::NotFound(receipt_id));
        }

        info!("Deleted receipt {}", receipt_id);

        Ok(())
    }

    /// Sum of all stored amounts in exact decimal arithmetic.
    ///
    /// An empty store totals to zero.
    pub async fn total_amount(&self) -> Result<Decimal, StoreError> {
        let _guard = self.collection_lock.read().await;

        let receipts = self
            .receipt_repository
            .load_all_receipts()
            .await
            .map_err(StoreError::Persistence)?;

        Ok(Self::sum_amounts(&receipts))
    }

    /// Produce the listing and the total from a single substrate read.
    ///
    /// This is the call presentation surfaces should use to render a claim
    /// screen: because both views come from one load under one read guard,
    /// the total always equals the sum of the listed amounts.
    pub async fn claim_summary(&self) -> Result<ClaimSummaryResponse, StoreError> {
        let _guard = self.collection_lock.read().await;

        let receipts = self
            .receipt_repository
            .load_all_receipts()
            .await
            .map_err(StoreError::Persistence)?;

        let total_amount = Self::sum_amounts(&receipts);

        Ok(ClaimSummaryResponse {
            receipts: receipts.into_iter().map(ReceiptMapper::to_dto).collect(),
            total_amount,
        })
    }

    fn sum_amounts(receipts: &[Receipt]) -> Decimal {
        receipts
            .iter()
            .fold(Decimal::ZERO, |total, receipt| total + receipt.amount)
    }
}

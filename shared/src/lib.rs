//! Shared data transfer types that cross the receipt store's boundary.
//!
//! Everything here is plain serializable data. The store accepts and returns
//! these types so that hosting surfaces (desktop shell, test harnesses) never
//! depend on the store's internal domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored receipt: a claimed amount paired with its photographic evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identity assigned at creation. Stable for the record's lifetime.
    pub id: Uuid,
    /// Creation instant in UTC. Listings are ordered by this field, most recent first.
    pub timestamp: DateTime<Utc>,
    /// Claimed amount, exact to the precision the user entered. Always positive.
    pub amount: Decimal,
    /// Raw photograph bytes captured for this receipt.
    pub image: Vec<u8>,
}

/// Request to log a new receipt.
///
/// The amount is expected to have already passed the store's amount
/// validation; the store still refuses non-positive amounts and empty images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReceiptRequest {
    /// Claimed amount for the receipt.
    pub amount: Decimal,
    /// Photograph bytes from the capture flow.
    pub image: Vec<u8>,
}

/// One consistent snapshot of the claim state.
///
/// The receipts and the total are computed from a single read of the store,
/// so the total always equals the sum of the listed amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSummaryResponse {
    /// All stored receipts, most recent first.
    pub receipts: Vec<Receipt>,
    /// Exact sum of the amounts in `receipts`.
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_round_trips_through_json() {
        let receipt = Receipt {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            amount: "12.50".parse().unwrap(),
            image: vec![0xFF, 0xD8, 0xFF, 0xE0],
        };

        let json = serde_json::to_string(&receipt).unwrap();
        let back: Receipt = serde_json::from_str(&json).unwrap();

        assert_eq!(receipt, back);
        // The amount must survive serialization textually, not as a float.
        assert!(json.contains("\"12.50\""));
    }

    #[test]
    fn test_claim_summary_round_trips_through_json() {
        let summary = ClaimSummaryResponse {
            receipts: vec![Receipt {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
                amount: "7.25".parse().unwrap(),
                image: vec![1, 2, 3],
            }],
            total_amount: "7.25".parse().unwrap(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let back: ClaimSummaryResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(summary, back);
    }
}

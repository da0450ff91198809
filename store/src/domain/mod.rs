//! # Domain Module
//!
//! Business logic for the receipt store, independent of any presentation
//! surface and of the concrete substrate behind the storage traits.
//!
//! - `amount_validator` checks raw amount text before a record exists
//! - `models` holds the receipt record and the store's error type
//! - `receipt_service` owns the collection: create, list, delete, total
//! - `mappers` converts between domain models and shared DTOs

pub mod amount_validator;
pub mod mappers;
pub mod models;
pub mod receipt_service;

pub use amount_validator::{validate_amount, AmountError};
pub use models::StoreError;
pub use receipt_service::ReceiptService;

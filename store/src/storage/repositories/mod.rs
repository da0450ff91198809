//! Repository implementations for the SQLite substrate.

pub mod receipt_repository;

pub use receipt_repository::ReceiptRepository;

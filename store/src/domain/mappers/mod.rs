//! Mappers between domain models and shared DTOs.

pub mod receipt_mapper;

pub use receipt_mapper::ReceiptMapper;

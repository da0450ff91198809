//! Domain models for the receipt store.

pub mod receipt;

pub use receipt::{Receipt, StoreError};

//! # Storage Module
//!
//! Persistence substrate for the receipt store, organized like the rest of
//! the backend: trait contracts first, concrete SQLite pieces behind them.
//!
//! - `traits` defines the substrate contract the domain layer programs
//!   against
//! - `connection` owns the SQLite pool, schema setup and lifecycle
//! - `repositories` implements the contract with plain SQL
//!
//! The substrate stores whole records. There is no partial update: a receipt
//! is inserted complete (image bytes inline) and removed complete, so a
//! delete can never leave an orphaned image behind.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::ReceiptRepository;
pub use traits::{Connection, ReceiptStorage};

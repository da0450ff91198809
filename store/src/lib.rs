//! # Xpense Logger Store
//!
//! Receipt store and aggregation engine: the complete non-UI core of the
//! expense logger. Capture surfaces hand over a photographed receipt and a
//! validated amount; this crate persists it, lists the collection most
//! recent first, deletes on request and keeps an exact running total of the
//! claim.
//!
//! ## Architecture
//!
//! The crate is organized in two layers:
//!
//! - `domain` contains the business logic: amount validation, the receipt
//!   service and the models it works on
//! - `storage` contains the persistence substrate: trait contracts, the
//!   SQLite connection and the repositories
//!
//! The domain layer only ever sees the storage traits, so the substrate can
//! be replaced without touching business logic.
//!
//! ## Lifecycle
//!
//! Hosts call [`initialize_store`] (or [`initialize_store_at`] to control
//! the database location) once at startup, keep the returned [`AppState`]
//! for the life of the process and call [`shutdown_store`] on the way out.
//! There is no ambient global state.
//!
//! Diagnostics go through the `log` facade; the host decides whether and
//! where they appear.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub use domain::amount_validator::{validate_amount, AmountError};
pub use domain::models::StoreError;
pub use domain::receipt_service::ReceiptService;
pub use storage::{Connection, DbConnection, ReceiptStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub receipt_service: ReceiptService<DbConnection>,
    pub connection: DbConnection,
}

/// Initialize the store against the default database location
pub async fn initialize_store() -> Result<AppState> {
    info!("Setting up database");
    let db_conn = Arc::new(DbConnection::init().await?);

    build_state(db_conn)
}

/// Initialize the store against a specific database URL.
///
/// Hosts that manage their own data directory pass the location here, for
/// example `sqlite:/home/user/.local/share/xpense/xpense.db`.
pub async fn initialize_store_at(database_url: &str) -> Result<AppState> {
    info!("Setting up database at {}", database_url);
    let db_conn = Arc::new(DbConnection::new(database_url).await?);

    build_state(db_conn)
}

/// Release the store's resources.
///
/// Pending operations finish first; anything attempted afterwards fails
/// with a persistence error.
pub async fn shutdown_store(state: AppState) {
    info!("Shutting down receipt store");
    state.connection.close().await;
}

fn build_state(db_conn: Arc<DbConnection>) -> Result<AppState> {
    info!("Setting up domain model");
    let receipt_service = ReceiptService::new(db_conn.clone());

    Ok(AppState {
        receipt_service,
        connection: (*db_conn).clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CreateReceiptRequest;

    fn request(amount: &str) -> CreateReceiptRequest {
        CreateReceiptRequest {
            amount: amount.parse().unwrap(),
            image: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }
    }

    #[tokio::test]
    async fn test_initialize_store_at_serves_requests() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = format!("sqlite:{}/xpense.db", dir.path().display());

        let state = initialize_store_at(&database_url).await.unwrap();

        let created = state
            .receipt_service
            .create_receipt(request("4.75"))
            .await
            .unwrap();
        let summary = state.receipt_service.claim_summary().await.unwrap();

        assert_eq!(summary.receipts, vec![created]);
        assert_eq!(summary.total_amount, "4.75".parse().unwrap());

        shutdown_store(state).await;
    }

    #[tokio::test]
    async fn test_shutdown_store_stops_the_substrate() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = format!("sqlite:{}/xpense.db", dir.path().display());

        let state = initialize_store_at(&database_url).await.unwrap();
        let service = state.receipt_service.clone();

        shutdown_store(state).await;

        let result = service.list_receipts().await;
        assert!(matches!(result, Err(StoreError::Persistence(_))));
    }
}

//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for the ledger and identity tables
//! - The game server's shared API key
//! - Ledger limits applied to every balance-changing operation

use sea_orm::DatabaseConnection;

use crate::server::{middleware::auth::ServiceKey, model::bank::LedgerLimits};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `ServiceKey` wraps its secret in an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Shared secret the game server presents as a bearer token.
    pub service_key: ServiceKey,

    /// Bounds applied to deposit, withdrawal and transfer amounts.
    pub limits: LedgerLimits,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `service_key` - Game server API key
    /// - `limits` - Ledger amount limits
    pub fn new(db: DatabaseConnection, service_key: ServiceKey, limits: LedgerLimits) -> Self {
        Self {
            db,
            service_key,
            limits,
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections of balance-changing operations.
///
/// Every variant means the ledger was left exactly as it was before the request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Amount is zero, negative, or above the configured ceiling.
    #[error("Invalid amount {amount}: must be between 1 and {max}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
        /// Configured upper bound
        max: i64,
    },

    /// The debited wallet does not hold enough to cover the amount.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Sender and receiver resolve to the same account.
    #[error("Cannot transfer to yourself")]
    SelfTransferNotAllowed,

    /// Crediting the wallet would overflow its balance.
    #[error("Balance limit exceeded")]
    BalanceLimitExceeded,
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        tracing::debug!("Ledger operation rejected: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

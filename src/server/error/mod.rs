//! Error hierarchy for the bank and its mapping onto HTTP responses.
//!
//! `AppError` is what every handler, service and repository returns. Rejections the
//! caller can act on (`AuthError`, `LedgerError`, `NotFound`, `BadRequest`) carry their
//! own status code and message. Everything else becomes a 500 whose detail is only
//! written to the log.

pub mod auth;
pub mod config;
pub mod internal;
pub mod ledger;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, ledger::LedgerError,
    },
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Startup configuration could not be loaded.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller could not be authenticated or may not run the operation (401/403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// A deposit, withdrawal or transfer was refused (400). Nothing was written.
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),

    /// Stored data is in a state the code does not expect.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Query or transaction failure. Any open transaction was rolled back, so the
    /// ledger is unchanged and the request can be retried.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Driver-level failure, e.g. while creating the session table.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced account or identity does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Request is malformed (400).
    #[error("{0}")]
    BadRequest(String),

    /// Logged in full; the client only sees a generic message.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::LedgerErr(err) => err.into_response(),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, Json(ErrorDto { error })).into_response(),
            Self::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs `E` and answers with a bare 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No service key was presented and the session holds no user.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(i32),

    /// A bearer key was presented but does not match the configured service key.
    #[error("Invalid API key")]
    InvalidServiceKey,

    /// User is logged in but has no Discord account linked.
    #[error("User {0} has no Discord account linked")]
    IdentityNotLinked(i32),

    /// Caller tier is not allowed to perform the requested operation.
    #[error("Access denied: {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Authentication required"
/// - `InvalidServiceKey` → 401 Unauthorized with "Invalid API Key"
/// - `IdentityNotLinked` → 403 Forbidden with "Discord account not linked."
/// - `AccessDenied` → 403 Forbidden with a generic message
///
/// Errors are logged at debug level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidServiceKey => (StatusCode::UNAUTHORIZED, "Invalid API Key"),
            Self::IdentityNotLinked(_) => (StatusCode::FORBIDDEN, "Discord account not linked."),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

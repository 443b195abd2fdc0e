//! Last-seen tracking for logged-in users.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::server::{data::user::UserRepository, middleware::session::AuthSession, state::AppState};

/// Records `last_seen_at` for the session user after each request.
///
/// Failures are logged and swallowed; they never change the response.
pub async fn track_activity(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    match AuthSession::new(&session).get_user_id().await {
        Ok(Some(user_id)) => {
            if let Err(e) = UserRepository::new(&state.db).touch_last_seen(user_id).await {
                tracing::debug!("Failed to update last seen for user {}: {}", user_id, e);
            }
        }
        Ok(None) => {}
        Err(e) => tracing::debug!("Failed to read session for activity tracking: {}", e),
    }

    response
}

//! Caller authentication.
//!
//! Every request is authenticated in the same order:
//!
//! 1. A well-formed `Authorization: Bearer <key>` header authenticates the game server.
//!    A bearer key that does not match is rejected outright.
//! 2. Otherwise the session must hold a user id for an existing user with a linked
//!    Discord account.
//!
//! Headers that are absent, not valid UTF-8, or use another scheme fall through to the
//! session check.

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::principal::Principal,
    service::identity::IdentityResolver,
};

/// The game server's shared API key.
#[derive(Clone)]
pub struct ServiceKey(Arc<SecretString>);

impl ServiceKey {
    pub fn new(key: SecretString) -> Self {
        Self(Arc::new(key))
    }

    /// Compares `candidate` with the configured key in constant time.
    ///
    /// An empty configured key never matches.
    pub fn verify(&self, candidate: &str) -> bool {
        let expected = self.0.expose_secret().as_bytes();
        if expected.is_empty() {
            return false;
        }

        expected.ct_eq(candidate.as_bytes()).into()
    }
}

impl std::fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ServiceKey([REDACTED])")
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The header must split into exactly two whitespace-separated parts, the first being
/// `Bearer`. Anything else yields `None` so the caller can fall back to the session.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    service_key: &'a ServiceKey,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, service_key: &'a ServiceKey) -> Self {
        Self {
            db,
            session,
            service_key,
        }
    }

    /// Determines who is making the request.
    ///
    /// # Returns
    /// - `Ok(Principal::Service)` - Bearer key matched the service key
    /// - `Ok(Principal::User(id))` - Session user exists and has a Discord link
    /// - `Err(AuthError::InvalidServiceKey)` - Bearer key presented but wrong
    /// - `Err(AuthError::UserNotInSession)` - No key and no session user
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::IdentityNotLinked)` - Session user has no Discord link
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AppError> {
        if let Some(token) = bearer_token(headers) {
            if self.service_key.verify(token) {
                return Ok(Principal::Service);
            }

            return Err(AuthError::InvalidServiceKey.into());
        }

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        IdentityResolver::new(self.db)
            .authorize_user(user.id)
            .await?;

        Ok(Principal::User(user.id))
    }
}

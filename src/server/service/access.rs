//! Operation-level authorization.

use crate::server::{
    error::auth::AuthError,
    model::principal::{Operation, Principal},
};

/// Decides whether a principal may invoke a ledger operation.
pub struct AccessGate;

impl AccessGate {
    /// Checks the principal's tier against the operation's allowed tiers.
    ///
    /// # Returns
    /// - `Ok(())` - Principal may run the operation
    /// - `Err(AuthError::AccessDenied)` - Wrong tier for this operation
    pub fn authorize(principal: &Principal, operation: Operation) -> Result<(), AuthError> {
        if operation.allowed_tiers().contains(&principal.tier()) {
            return Ok(());
        }

        Err(AuthError::AccessDenied(format!(
            "{:?} caller may not perform {:?}",
            principal.tier(),
            operation
        )))
    }
}

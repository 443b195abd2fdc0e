//! References to accounts coming from outside the bank.

use crate::{model::bank::TransferDto, server::error::AppError};

/// External identity providers an account can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Discord,
}

impl Provider {
    /// Provider name as stored in `social_account.provider`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discord => "discord",
        }
    }
}

/// A way of naming an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRef {
    /// Account linked to `uid` at `provider`.
    External { provider: Provider, uid: String },
    /// Account with this native username.
    Username(String),
}

impl AccountRef {
    pub fn discord(uid: impl Into<String>) -> Self {
        Self::External {
            provider: Provider::Discord,
            uid: uid.into(),
        }
    }
}

/// Account an `AccountRef` resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccount {
    pub user_id: i32,
    pub username: String,
}

/// Parameters for a transfer started by a logged-in user.
#[derive(Debug, Clone)]
pub struct UserTransferParam {
    pub target: AccountRef,
    pub amount: i64,
}

impl UserTransferParam {
    /// Picks the recipient reference from the request.
    ///
    /// A non-empty Discord id takes precedence over a username.
    ///
    /// # Returns
    /// - `Ok(UserTransferParam)` - Recipient chosen
    /// - `Err(AppError::BadRequest)` - Neither recipient field was provided
    pub fn from_dto(dto: TransferDto) -> Result<Self, AppError> {
        let non_empty = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let target = match (non_empty(dto.to_discord_id), non_empty(dto.to_username)) {
            (Some(discord_id), _) => AccountRef::discord(discord_id),
            (None, Some(username)) => AccountRef::Username(username),
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Either to_discord_id or to_username must be provided.".to_string(),
                ))
            }
        };

        Ok(Self {
            target,
            amount: dto.amount,
        })
    }
}

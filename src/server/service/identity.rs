//! Identity resolution.
//!
//! Maps account references (Discord ids, usernames) to internal accounts. Lookups
//! never create anything; wallet creation belongs to the ledger store and happens only
//! after resolution succeeds.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{social_account::SocialAccountRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::identity::{AccountRef, Provider, ResolvedAccount},
};

pub struct IdentityResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a reference to the account it names.
    ///
    /// # Returns
    /// - `Ok(ResolvedAccount)` - Matching account
    /// - `Err(AppError::NotFound)` - No account matches the reference
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve(&self, reference: &AccountRef) -> Result<ResolvedAccount, AppError> {
        let user = match reference {
            AccountRef::External { provider, uid } => {
                SocialAccountRepository::new(self.db)
                    .find_user_by_uid(*provider, uid)
                    .await?
            }
            AccountRef::Username(username) => {
                UserRepository::new(self.db)
                    .find_by_username(username)
                    .await?
            }
        };

        let Some(user) = user else {
            return Err(AppError::NotFound(format!(
                "User with this {} not found",
                match reference {
                    AccountRef::External { .. } => "Discord ID",
                    AccountRef::Username(_) => "username",
                }
            )));
        };

        Ok(ResolvedAccount {
            user_id: user.id,
            username: user.username,
        })
    }

    /// Resolves an internal user id, for callers already holding one.
    ///
    /// # Returns
    /// - `Ok(ResolvedAccount)` - User exists
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn resolve_user_id(&self, user_id: i32) -> Result<ResolvedAccount, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ResolvedAccount {
            user_id: user.id,
            username: user.username,
        })
    }

    /// Checks that a user may touch the ledger at all.
    ///
    /// End users need a linked Discord account before any bank operation.
    ///
    /// # Returns
    /// - `Ok(())` - User has a Discord link
    /// - `Err(AuthError::IdentityNotLinked)` - No Discord link
    pub async fn authorize_user(&self, user_id: i32) -> Result<(), AppError> {
        let linked = SocialAccountRepository::new(self.db)
            .user_has_link(user_id, Provider::Discord)
            .await?;

        if !linked {
            return Err(AuthError::IdentityNotLinked(user_id).into());
        }

        Ok(())
    }

    /// Reports whether a Discord id is linked to any account.
    pub async fn is_linked(&self, provider: Provider, uid: &str) -> Result<bool, AppError> {
        let exists = SocialAccountRepository::new(self.db)
            .uid_exists(provider, uid)
            .await?;

        Ok(exists)
    }
}

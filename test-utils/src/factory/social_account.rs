//! Social account factory for linking users to external identities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test identity links.
///
/// Defaults to the `discord` provider with a unique numeric uid.
pub struct SocialAccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    provider: String,
    uid: String,
}

impl<'a> SocialAccountFactory<'a> {
    /// Creates a new SocialAccountFactory for the given user.
    ///
    /// Defaults:
    /// - provider: `"discord"`
    /// - uid: 18-digit snowflake-like string derived from the counter
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            provider: "discord".to_string(),
            uid: format!("{}", 100_000_000_000_000_000u64 + id),
        }
    }

    /// Sets the identity provider.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Sets the provider-side uid.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Builds and inserts the link into the database.
    pub async fn build(self) -> Result<entity::social_account::Model, DbErr> {
        entity::social_account::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            provider: ActiveValue::Set(self.provider),
            uid: ActiveValue::Set(self.uid),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Links a user to a generated Discord id.
pub async fn create_discord_link(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::social_account::Model, DbErr> {
    SocialAccountFactory::new(db, user_id).build().await
}

/// Links a user to a specific Discord id.
pub async fn create_discord_link_with_uid(
    db: &DatabaseConnection,
    user_id: i32,
    uid: impl Into<String>,
) -> Result<entity::social_account::Model, DbErr> {
    SocialAccountFactory::new(db, user_id).uid(uid).build().await
}

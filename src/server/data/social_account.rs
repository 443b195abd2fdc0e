//! External identity link repository.
//!
//! Maps provider-side ids (Discord ids) to internal user ids. Read-only: links are
//! created by the login flow, outside the bank.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::model::identity::Provider;

pub struct SocialAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialAccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user linked to `uid` at `provider`.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Link exists
    /// - `Ok(None)` - Nobody is linked to that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_by_uid(
        &self,
        provider: Provider,
        uid: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let result = entity::prelude::SocialAccount::find()
            .filter(entity::social_account::Column::Provider.eq(provider.as_str()))
            .filter(entity::social_account::Column::Uid.eq(uid))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user))
    }

    /// Checks whether any account is linked to `uid` at `provider`.
    pub async fn uid_exists(&self, provider: Provider, uid: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SocialAccount::find()
            .filter(entity::social_account::Column::Provider.eq(provider.as_str()))
            .filter(entity::social_account::Column::Uid.eq(uid))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the user has a link at `provider`.
    pub async fn user_has_link(&self, user_id: i32, provider: Provider) -> Result<bool, DbErr> {
        let count = entity::prelude::SocialAccount::find()
            .filter(entity::social_account::Column::UserId.eq(user_id))
            .filter(entity::social_account::Column::Provider.eq(provider.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

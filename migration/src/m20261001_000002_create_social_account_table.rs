use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialAccount::Id))
                    .col(integer(SocialAccount::UserId))
                    .col(string(SocialAccount::Provider))
                    .col(string(SocialAccount::Uid))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_account_user_id")
                            .from(SocialAccount::Table, SocialAccount::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // An external id resolves to at most one account
        manager
            .create_index(
                Index::create()
                    .name("idx_social_account_provider_uid")
                    .table(SocialAccount::Table)
                    .col(SocialAccount::Provider)
                    .col(SocialAccount::Uid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // At most one link per provider for each account
        manager
            .create_index(
                Index::create()
                    .name("idx_social_account_user_provider")
                    .table(SocialAccount::Table)
                    .col(SocialAccount::UserId)
                    .col(SocialAccount::Provider)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_social_account_user_provider")
                    .table(SocialAccount::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_social_account_provider_uid")
                    .table(SocialAccount::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialAccount {
    Table,
    Id,
    UserId,
    Provider,
    Uid,
}

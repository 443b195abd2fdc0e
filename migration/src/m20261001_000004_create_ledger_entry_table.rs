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
                    .table(LedgerEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(LedgerEntry::Id))
                    .col(integer(LedgerEntry::UserId))
                    .col(big_integer(LedgerEntry::Amount))
                    .col(string_len(LedgerEntry::Kind, 10))
                    .col(text_null(LedgerEntry::Description))
                    .col(
                        timestamp_with_time_zone(LedgerEntry::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_entry_user_id")
                            .from(LedgerEntry::Table, LedgerEntry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History listing is per account, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entry_user_created")
                    .table(LedgerEntry::Table)
                    .col(LedgerEntry::UserId)
                    .col(LedgerEntry::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ledger_entry_user_created")
                    .table(LedgerEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LedgerEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LedgerEntry {
    Table,
    Id,
    UserId,
    Amount,
    Kind,
    Description,
    CreatedAt,
}

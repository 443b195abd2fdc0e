pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_social_account_table;
mod m20261001_000003_create_wallet_table;
mod m20261001_000004_create_ledger_entry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_social_account_table::Migration),
            Box::new(m20261001_000003_create_wallet_table::Migration),
            Box::new(m20261001_000004_create_ledger_entry_table::Migration),
        ]
    }
}

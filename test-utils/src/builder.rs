use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and opens an in-memory database with them.
///
/// ```rust,ignore
/// let mut test = TestBuilder::new().with_bank_tables().build().await?;
/// let db = test.database().await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a CREATE TABLE for `entity`. Referenced tables must be queued first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Users and their Discord links, enough for identity lookups and access checks.
    pub fn with_identity_tables(self) -> Self {
        self.with_table(User).with_table(SocialAccount)
    }

    /// Identity tables plus wallets and the ledger.
    pub fn with_bank_tables(self) -> Self {
        self.with_identity_tables()
            .with_table(Wallet)
            .with_table(LedgerEntry)
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

//! Ledger entry factory for seeding transaction history.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating raw ledger entries.
///
/// Entries are inserted without touching the wallet; use this only to seed
/// history for listing tests.
pub struct LedgerEntryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    amount: i64,
    kind: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> LedgerEntryFactory<'a> {
    /// Creates a new factory for the given user.
    ///
    /// Defaults:
    /// - amount: `10`
    /// - kind: `"DEPOSIT"`
    /// - description: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            amount: 10,
            kind: "DEPOSIT".to_string(),
            description: None,
            created_at: Utc::now(),
        }
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the entry into the database.
    pub async fn build(self) -> Result<entity::ledger_entry::Model, DbErr> {
        entity::ledger_entry::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            kind: ActiveValue::Set(self.kind),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

//! Ledger store: wallet balances and their append-only history.
//!
//! `LedgerRepository` is generic over `ConnectionTrait` so the same methods run against
//! the connection pool or inside a `DatabaseTransaction`. Balance changes only happen
//! through `adjust_balance`, which guards non-negativity in the UPDATE itself and writes
//! the matching ledger entry on the same connection.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, ledger::LedgerError, AppError},
    model::bank::{Account, EntryKind, LedgerEntry},
};

/// Repository providing wallet and ledger entry operations.
pub struct LedgerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LedgerRepository<'a, C> {
    /// Creates a new LedgerRepository over a connection or an open transaction.
    ///
    /// # Arguments
    /// - `db` - Database connection or transaction
    ///
    /// # Returns
    /// - `LedgerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads an account without creating it.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Wallet row exists
    /// - `Ok(None)` - Account has never been touched
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_account(&self, user_id: i32) -> Result<Option<Account>, DbErr> {
        let wallet = entity::prelude::Wallet::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(wallet.map(Account::from_entity))
    }

    /// Returns the account for `user_id`, creating an empty wallet if none exists.
    ///
    /// Insertion uses `ON CONFLICT DO NOTHING`, so concurrent callers converge on the
    /// same row.
    ///
    /// # Returns
    /// - `Ok(Account)` - Existing or newly created account
    /// - `Err(AppError::DbErr)` - Database error during insert or query
    pub async fn ensure_account(&self, user_id: i32) -> Result<Account, AppError> {
        if let Some(account) = self.find_account(user_id).await? {
            return Ok(account);
        }

        entity::prelude::Wallet::insert(entity::wallet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            balance: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::wallet::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let account = self
            .find_account(user_id)
            .await?
            .ok_or(InternalError::WalletMissing(user_id))?;

        Ok(account)
    }

    /// Applies `delta` to the wallet and appends one ledger entry documenting it.
    ///
    /// The balance check and write are a single conditional UPDATE, so a concurrent
    /// debit cannot slip between them. The wallet must already exist (see
    /// `ensure_account`). Run this inside a transaction when the entry and balance
    /// must commit together with other changes.
    ///
    /// # Arguments
    /// - `user_id` - Account to change
    /// - `delta` - Signed change; negative debits
    /// - `kind` - Ledger entry kind
    /// - `description` - Human-readable provenance stored on the entry
    ///
    /// # Returns
    /// - `Ok(Account)` - Account after the change
    /// - `Err(LedgerError::InsufficientFunds)` - Debit would take the balance below zero
    /// - `Err(LedgerError::BalanceLimitExceeded)` - Credit would overflow the balance
    /// - `Err(InternalError::WalletMissing)` - Wallet does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing was applied
    pub async fn adjust_balance(
        &self,
        user_id: i32,
        delta: i64,
        kind: EntryKind,
        description: String,
    ) -> Result<Account, AppError> {
        let now = Utc::now();

        let update = entity::prelude::Wallet::update_many()
            .col_expr(
                entity::wallet::Column::Balance,
                Expr::col(entity::wallet::Column::Balance).add(delta),
            )
            .col_expr(entity::wallet::Column::UpdatedAt, Expr::value(now))
            .filter(entity::wallet::Column::UserId.eq(user_id));

        let update = if delta < 0 {
            update.filter(entity::wallet::Column::Balance.gte(delta.saturating_neg()))
        } else {
            update.filter(entity::wallet::Column::Balance.lte(i64::MAX - delta))
        };

        let result = update.exec(self.db).await?;

        if result.rows_affected == 0 {
            if self.find_account(user_id).await?.is_none() {
                return Err(InternalError::WalletMissing(user_id).into());
            }

            let rejection = if delta < 0 {
                LedgerError::InsufficientFunds
            } else {
                LedgerError::BalanceLimitExceeded
            };
            return Err(rejection.into());
        }

        entity::ledger_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(delta),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            description: ActiveValue::Set(Some(description)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let account = self
            .find_account(user_id)
            .await?
            .ok_or(InternalError::WalletMissing(user_id))?;

        Ok(account)
    }

    /// Gets one page of an account's ledger entries, newest first.
    ///
    /// Entries created in the same instant are ordered by descending id.
    ///
    /// # Arguments
    /// - `user_id` - Account whose history to read
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries for the page and total entry count
    /// - `Err(AppError)` - Database error or unreadable entry
    pub async fn get_entries_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<LedgerEntry>, u64), AppError> {
        let paginator = entity::prelude::LedgerEntry::find()
            .filter(entity::ledger_entry::Column::UserId.eq(user_id))
            .order_by_desc(entity::ledger_entry::Column::CreatedAt)
            .order_by_desc(entity::ledger_entry::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let entries = entities
            .into_iter()
            .map(LedgerEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }
}

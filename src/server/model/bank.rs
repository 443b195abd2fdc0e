//! Wallet and ledger domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::bank::{BalanceDto, LedgerEntryDto, PaginatedLedgerEntriesDto},
    server::{
        config::DEFAULT_MAX_AMOUNT,
        error::{internal::InternalError, ledger::LedgerError, AppError},
    },
};

/// Current holdings of one account.
///
/// A missing wallet row is a valid account with balance 0 and no `updated_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub user_id: i32,
    pub balance: i64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Account that has never been touched.
    pub fn empty(user_id: i32) -> Self {
        Self {
            user_id,
            balance: 0,
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::wallet::Model) -> Self {
        Self {
            user_id: entity.user_id,
            balance: entity.balance,
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> BalanceDto {
        BalanceDto {
            balance: self.balance,
            updated_at: self.updated_at,
        }
    }
}

/// Kind of balance change recorded by a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
            Self::Transfer => "TRANSFER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DEPOSIT" => Some(Self::Deposit),
            "WITHDRAW" => Some(Self::Withdraw),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// Immutable record of one balance change.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: i32,
    pub user_id: i32,
    pub amount: i64,
    pub kind: EntryKind,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Converts an entity model to a ledger entry domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - The converted entry
    /// - `Err(AppError::InternalErr(UnknownEntryKind))` - Stored kind is not recognized
    pub fn from_entity(entity: entity::ledger_entry::Model) -> Result<Self, AppError> {
        let kind = EntryKind::parse(&entity.kind).ok_or_else(|| InternalError::UnknownEntryKind {
            entry_id: entity.id,
            kind: entity.kind.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            amount: entity.amount,
            kind,
            description: entity.description,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> LedgerEntryDto {
        LedgerEntryDto {
            id: self.id,
            amount: self.amount,
            transaction_type: self.kind.as_str().to_string(),
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// One page of an account's history, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedLedgerEntries {
    pub entries: Vec<LedgerEntry>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedLedgerEntries {
    pub fn into_dto(self) -> PaginatedLedgerEntriesDto {
        PaginatedLedgerEntriesDto {
            entries: self.entries.into_iter().map(|e| e.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated history queries.
#[derive(Debug, Clone)]
pub struct GetEntriesParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of entries per page.
    pub per_page: u64,
}

/// Amount bounds applied to every balance-changing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerLimits {
    pub max_amount: i64,
}

impl LedgerLimits {
    pub fn new(max_amount: i64) -> Self {
        Self { max_amount }
    }

    /// Accepts amounts in `1..=max_amount`.
    ///
    /// # Returns
    /// - `Ok(amount)` - Amount is usable
    /// - `Err(LedgerError::InvalidAmount)` - Zero, negative or above the ceiling
    pub fn validate(&self, amount: i64) -> Result<i64, LedgerError> {
        if amount < 1 || amount > self.max_amount {
            return Err(LedgerError::InvalidAmount {
                amount,
                max: self.max_amount,
            });
        }

        Ok(amount)
    }
}

impl Default for LedgerLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AMOUNT)
    }
}

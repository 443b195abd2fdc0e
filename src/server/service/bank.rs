//! Transfer engine.
//!
//! Every balance-changing operation validates its amount, resolves the accounts it
//! names, and then applies its ledger legs inside one database transaction. Any error
//! drops the transaction, which rolls back every leg already applied.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::ledger::LedgerRepository,
    error::{auth::AuthError, ledger::LedgerError, AppError},
    model::{
        bank::{Account, EntryKind, GetEntriesParam, LedgerLimits, PaginatedLedgerEntries},
        identity::{AccountRef, Provider, ResolvedAccount, UserTransferParam},
        principal::{Operation, Principal},
    },
    service::{access::AccessGate, identity::IdentityResolver},
};

const GAME_SERVER_SUFFIX: &str = " (game server)";

/// Largest page of history returned in one request.
pub const MAX_ENTRIES_PER_PAGE: u64 = 100;

/// Where a transfer was initiated; only affects entry descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransferOrigin {
    Web,
    GameServer,
}

impl TransferOrigin {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Web => "",
            Self::GameServer => GAME_SERVER_SUFFIX,
        }
    }
}

/// One single-account change within a transfer.
struct Leg {
    user_id: i32,
    delta: i64,
    description: String,
}

/// Service providing the bank's ledger operations.
///
/// Each public method takes the calling `Principal` and checks it with `AccessGate`
/// before doing anything else.
pub struct BankService<'a> {
    db: &'a DatabaseConnection,
    limits: LedgerLimits,
}

impl<'a> BankService<'a> {
    /// Creates a new BankService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `limits` - Amount bounds for deposits, withdrawals and transfers
    pub fn new(db: &'a DatabaseConnection, limits: LedgerLimits) -> Self {
        Self { db, limits }
    }

    /// Reads an account's balance.
    ///
    /// Users read their own account and may not name another. The game server must name
    /// the account it wants. Reading never creates a wallet; an untouched account reports
    /// a zero balance.
    ///
    /// # Arguments
    /// - `principal` - Calling principal
    /// - `reference` - Account to read (service callers only)
    ///
    /// # Returns
    /// - `Ok(Account)` - Current balance
    /// - `Err(AuthError::AccessDenied)` - Reference missing for service, or present for a user
    /// - `Err(AppError::NotFound)` - Reference does not match any account
    pub async fn get_balance(
        &self,
        principal: &Principal,
        reference: Option<&AccountRef>,
    ) -> Result<Account, AppError> {
        AccessGate::authorize(principal, Operation::GetBalance)?;

        let user_id = match (principal, reference) {
            (Principal::User(user_id), None) => *user_id,
            (Principal::User(_), Some(_)) => {
                return Err(AuthError::AccessDenied(
                    "users may only read their own balance".to_string(),
                )
                .into())
            }
            (Principal::Service, Some(reference)) => {
                IdentityResolver::new(self.db)
                    .resolve(reference)
                    .await?
                    .user_id
            }
            (Principal::Service, None) => {
                return Err(AuthError::AccessDenied(
                    "service balance reads must name an account".to_string(),
                )
                .into())
            }
        };

        let account = LedgerRepository::new(self.db).find_account(user_id).await?;

        Ok(account.unwrap_or_else(|| Account::empty(user_id)))
    }

    /// Lists the calling user's ledger entries, newest first.
    ///
    /// `per_page` is clamped to `1..=MAX_ENTRIES_PER_PAGE`.
    ///
    /// # Returns
    /// - `Ok(PaginatedLedgerEntries)` - Requested page with pagination metadata
    /// - `Err(AuthError::AccessDenied)` - Caller is not a user
    pub async fn list_transactions(
        &self,
        principal: &Principal,
        param: GetEntriesParam,
    ) -> Result<PaginatedLedgerEntries, AppError> {
        AccessGate::authorize(principal, Operation::ListTransactions)?;

        let Principal::User(user_id) = *principal else {
            return Err(AuthError::AccessDenied("history is per user".to_string()).into());
        };

        let per_page = param.per_page.clamp(1, MAX_ENTRIES_PER_PAGE);

        let (entries, total) = LedgerRepository::new(self.db)
            .get_entries_paginated(user_id, param.page, per_page)
            .await?;

        Ok(PaginatedLedgerEntries {
            entries,
            total,
            page: param.page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Credits an account on behalf of the game server.
    ///
    /// # Returns
    /// - `Ok(Account)` - Account after the deposit
    /// - `Err(LedgerError::InvalidAmount)` - Amount out of bounds
    /// - `Err(AppError::NotFound)` - Reference does not match any account
    /// - `Err(LedgerError::BalanceLimitExceeded)` - Balance would overflow
    pub async fn deposit(
        &self,
        principal: &Principal,
        reference: &AccountRef,
        amount: i64,
    ) -> Result<Account, AppError> {
        AccessGate::authorize(principal, Operation::Deposit)?;
        let amount = self.limits.validate(amount)?;

        let target = IdentityResolver::new(self.db).resolve(reference).await?;

        let txn = self.db.begin().await?;
        let ledger = LedgerRepository::new(&txn);
        ledger.ensure_account(target.user_id).await?;
        let account = ledger
            .adjust_balance(
                target.user_id,
                amount,
                EntryKind::Deposit,
                "Deposit from game server".to_string(),
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            user_id = target.user_id,
            amount,
            balance = account.balance,
            "Deposit applied"
        );

        Ok(account)
    }

    /// Debits an account on behalf of the game server.
    ///
    /// # Returns
    /// - `Ok(Account)` - Account after the withdrawal
    /// - `Err(LedgerError::InvalidAmount)` - Amount out of bounds
    /// - `Err(AppError::NotFound)` - Reference does not match any account
    /// - `Err(LedgerError::InsufficientFunds)` - Balance does not cover the amount
    pub async fn withdraw(
        &self,
        principal: &Principal,
        reference: &AccountRef,
        amount: i64,
    ) -> Result<Account, AppError> {
        AccessGate::authorize(principal, Operation::Withdraw)?;
        let amount = self.limits.validate(amount)?;

        let target = IdentityResolver::new(self.db).resolve(reference).await?;

        self.precheck_funds(target.user_id, amount).await?;

        let txn = self.db.begin().await?;
        let ledger = LedgerRepository::new(&txn);
        ledger.ensure_account(target.user_id).await?;
        let account = ledger
            .adjust_balance(
                target.user_id,
                -amount,
                EntryKind::Withdraw,
                "Withdraw to game server".to_string(),
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            user_id = target.user_id,
            amount,
            balance = account.balance,
            "Withdrawal applied"
        );

        Ok(account)
    }

    /// Transfers from the calling user to the account named in `param`.
    ///
    /// # Returns
    /// - `Ok(Account)` - Sender's account after the transfer
    /// - `Err(LedgerError::InvalidAmount)` - Amount out of bounds
    /// - `Err(AppError::NotFound)` - Recipient does not exist
    /// - `Err(LedgerError::SelfTransferNotAllowed)` - Recipient is the sender
    /// - `Err(LedgerError::InsufficientFunds)` - Sender cannot cover the amount
    pub async fn transfer_by_user(
        &self,
        principal: &Principal,
        param: UserTransferParam,
    ) -> Result<Account, AppError> {
        AccessGate::authorize(principal, Operation::TransferByUser)?;

        let Principal::User(sender_id) = *principal else {
            return Err(AuthError::AccessDenied("transfers need a sender".to_string()).into());
        };

        let amount = self.limits.validate(param.amount)?;

        let resolver = IdentityResolver::new(self.db);
        let sender = resolver.resolve_user_id(sender_id).await?;
        let receiver = resolver.resolve(&param.target).await?;

        self.transfer(sender, receiver, amount, TransferOrigin::Web)
            .await
    }

    /// Transfers between two Discord-linked accounts on behalf of the game server.
    ///
    /// # Returns
    /// - `Ok(Account)` - Sender's account after the transfer
    /// - `Err(LedgerError::InvalidAmount)` - Amount out of bounds
    /// - `Err(AppError::NotFound)` - Either side does not exist
    /// - `Err(LedgerError::SelfTransferNotAllowed)` - Both ids name the same account
    /// - `Err(LedgerError::InsufficientFunds)` - Sender cannot cover the amount
    pub async fn transfer_by_service(
        &self,
        principal: &Principal,
        from: &AccountRef,
        to: &AccountRef,
        amount: i64,
    ) -> Result<Account, AppError> {
        AccessGate::authorize(principal, Operation::TransferByService)?;
        let amount = self.limits.validate(amount)?;

        let resolver = IdentityResolver::new(self.db);
        let sender = resolver.resolve(from).await?;
        let receiver = resolver.resolve(to).await?;

        self.transfer(sender, receiver, amount, TransferOrigin::GameServer)
            .await
    }

    /// Reports whether a Discord id is linked to an account.
    pub async fn link_status(&self, principal: &Principal, discord_id: &str) -> Result<bool, AppError> {
        AccessGate::authorize(principal, Operation::LinkStatus)?;

        IdentityResolver::new(self.db)
            .is_linked(Provider::Discord, discord_id)
            .await
    }

    /// Moves `amount` from `sender` to `receiver` as one atomic unit.
    ///
    /// Both legs are applied in ascending user id order so that opposing transfers
    /// lock rows in the same order.
    async fn transfer(
        &self,
        sender: ResolvedAccount,
        receiver: ResolvedAccount,
        amount: i64,
        origin: TransferOrigin,
    ) -> Result<Account, AppError> {
        if sender.user_id == receiver.user_id {
            return Err(LedgerError::SelfTransferNotAllowed.into());
        }

        self.precheck_funds(sender.user_id, amount).await?;

        let mut legs = [
            Leg {
                user_id: sender.user_id,
                delta: -amount,
                description: format!("Transfer to {}{}", receiver.username, origin.suffix()),
            },
            Leg {
                user_id: receiver.user_id,
                delta: amount,
                description: format!("Transfer from {}{}", sender.username, origin.suffix()),
            },
        ];
        legs.sort_by_key(|leg| leg.user_id);

        let txn = self.db.begin().await?;
        let ledger = LedgerRepository::new(&txn);

        for leg in &legs {
            ledger.ensure_account(leg.user_id).await?;
        }

        let mut sender_account = None;
        for leg in legs {
            let account = ledger
                .adjust_balance(leg.user_id, leg.delta, EntryKind::Transfer, leg.description)
                .await?;
            if leg.user_id == sender.user_id {
                sender_account = Some(account);
            }
        }

        let Some(sender_account) = sender_account else {
            return Err(AppError::InternalError(format!(
                "transfer from user {} produced no sender leg",
                sender.user_id
            )));
        };

        txn.commit().await?;

        tracing::info!(
            from_user_id = sender.user_id,
            to_user_id = receiver.user_id,
            amount,
            ?origin,
            "Transfer applied"
        );

        Ok(sender_account)
    }

    /// Fails fast when the current balance cannot cover `amount`.
    ///
    /// The guarded update in `adjust_balance` is what actually enforces non-negativity;
    /// the balance may change between this read and the transaction.
    async fn precheck_funds(&self, user_id: i32, amount: i64) -> Result<(), AppError> {
        let balance = LedgerRepository::new(self.db)
            .find_account(user_id)
            .await?
            .map(|account| account.balance)
            .unwrap_or(0);

        if balance < amount {
            return Err(LedgerError::InsufficientFunds.into());
        }

        Ok(())
    }
}

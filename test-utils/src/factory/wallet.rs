//! Wallet factory for seeding balances.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a wallet row for `user_id` holding `balance`.
///
/// Writes the row directly, without a ledger entry, so tests can start from any
/// balance.
///
/// # Returns
/// - `Ok(entity::wallet::Model)` - Created wallet
/// - `Err(DbErr)` - Database error during insert (e.g. wallet already exists)
pub async fn create_wallet(
    db: &DatabaseConnection,
    user_id: i32,
    balance: i64,
) -> Result<entity::wallet::Model, DbErr> {
    entity::wallet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        balance: ActiveValue::Set(balance),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with a Discord link.
///
/// The Discord id is derived from the counter so each call yields a distinct link.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, social_account))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_linked_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::social_account::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let link = crate::factory::social_account::create_discord_link(db, user.id).await?;

    Ok((user, link))
}

/// Creates a Discord-linked user whose wallet holds `balance`.
///
/// # Arguments
/// - `db` - Database connection
/// - `balance` - Starting wallet balance
///
/// # Returns
/// - `Ok((user, social_account, wallet))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_funded_user(
    db: &DatabaseConnection,
    balance: i64,
) -> Result<
    (
        entity::user::Model,
        entity::social_account::Model,
        entity::wallet::Model,
    ),
    DbErr,
> {
    let (user, link) = create_linked_user(db).await?;
    let wallet = crate::factory::wallet::create_wallet(db, user.id, balance).await?;

    Ok((user, link, wallet))
}

use super::*;

/// Tests a service deposit into a fresh account.
///
/// The wallet is created on demand and the entry carries the game server description.
///
/// Expected: Ok with balance 50 and one DEPOSIT entry
#[tokio::test]
async fn credits_new_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, link) = factory::create_linked_user(db).await?;

    let account = BankService::new(db, LedgerLimits::default())
        .deposit(&Principal::Service, &AccountRef::discord(link.uid), 50)
        .await?;

    assert_eq!(account.balance, 50);

    let entries = entries_of(db, user.id).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 50);
    assert_eq!(entries[0].kind, "DEPOSIT");
    assert_eq!(
        entries[0].description.as_deref(),
        Some("Deposit from game server")
    );

    Ok(())
}

/// Tests rejecting a negative deposit.
///
/// Expected: Err(InvalidAmount), balance unchanged, no entry
#[tokio::test]
async fn rejects_negative_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, link, _) = factory::create_funded_user(db, 10).await?;

    let result = BankService::new(db, LedgerLimits::default())
        .deposit(&Principal::Service, &AccountRef::discord(link.uid), -5)
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InvalidAmount { amount: -5, .. }))
    ));
    assert_eq!(balance_of(db, user.id).await, 10);
    assert!(entries_of(db, user.id).await.is_empty());

    Ok(())
}

/// Tests the configured amount ceiling.
///
/// Expected: Ok at the ceiling, Err(InvalidAmount) one above it
#[tokio::test]
async fn enforces_max_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, link) = factory::create_linked_user(db).await?;
    let reference = AccountRef::discord(link.uid);

    let service = BankService::new(db, LedgerLimits::new(1_000));

    assert_eq!(
        service.deposit(&Principal::Service, &reference, 1_000).await?.balance,
        1_000
    );
    assert!(matches!(
        service.deposit(&Principal::Service, &reference, 1_001).await,
        Err(AppError::LedgerErr(LedgerError::InvalidAmount { max: 1_000, .. }))
    ));

    Ok(())
}

/// Tests depositing to an unlinked Discord id.
///
/// Expected: Err(AppError::NotFound) and no wallet created
#[tokio::test]
async fn unknown_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BankService::new(db, LedgerLimits::default())
        .deposit(&Principal::Service, &AccountRef::discord("1"), 10)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Wallet::find().count(db).await?, 0);

    Ok(())
}

/// Tests that users cannot mint money.
///
/// Expected: Err(AccessDenied) and no balance change
#[tokio::test]
async fn users_cannot_deposit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, link, _) = factory::create_funded_user(db, 10).await?;

    let result = BankService::new(db, LedgerLimits::default())
        .deposit(&Principal::User(user.id), &AccountRef::discord(link.uid), 10)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));
    assert_eq!(balance_of(db, user.id).await, 10);

    Ok(())
}

use super::*;

/// Tests a user reading their own balance.
///
/// Expected: Ok with the stored balance
#[tokio::test]
async fn user_reads_own_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::create_funded_user(db, 120).await?;

    let account = BankService::new(db, LedgerLimits::default())
        .get_balance(&Principal::User(user.id), None)
        .await?;

    assert_eq!(account.balance, 120);
    assert!(account.updated_at.is_some());

    Ok(())
}

/// Tests that probing a balance never creates a wallet.
///
/// Expected: Ok with balance 0, no updated_at, and no wallet row
#[tokio::test]
async fn missing_wallet_reads_as_zero_without_creating_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, link) = factory::create_linked_user(db).await?;

    let service = BankService::new(db, LedgerLimits::default());
    let own = service.get_balance(&Principal::User(user.id), None).await?;
    let probed = service
        .get_balance(&Principal::Service, Some(&AccountRef::discord(link.uid)))
        .await?;

    assert_eq!(own.balance, 0);
    assert!(own.updated_at.is_none());
    assert_eq!(probed.balance, 0);
    assert_eq!(entity::prelude::Wallet::find().count(db).await?, 0);

    Ok(())
}

/// Tests the service reading a named account.
///
/// Expected: Ok with that account's balance
#[tokio::test]
async fn service_reads_named_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, link, _) = factory::create_funded_user(db, 42).await?;

    let account = BankService::new(db, LedgerLimits::default())
        .get_balance(&Principal::Service, Some(&AccountRef::discord(link.uid)))
        .await?;

    assert_eq!(account.balance, 42);

    Ok(())
}

/// Tests the service naming an unlinked Discord id.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn service_unknown_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BankService::new(db, LedgerLimits::default())
        .get_balance(&Principal::Service, Some(&AccountRef::discord("1")))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the rules on naming accounts.
///
/// The service has no implicit account, and users may not read someone else's.
///
/// Expected: Err(AccessDenied) in both cases
#[tokio::test]
async fn account_naming_is_tier_specific() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::create_funded_user(db, 10).await?;
    let (_, other_link, _) = factory::create_funded_user(db, 10).await?;

    let service = BankService::new(db, LedgerLimits::default());

    assert!(matches!(
        service.get_balance(&Principal::Service, None).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));
    assert!(matches!(
        service
            .get_balance(
                &Principal::User(user.id),
                Some(&AccountRef::discord(other_link.uid))
            )
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

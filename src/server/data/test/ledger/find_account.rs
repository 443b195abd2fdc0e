use super::*;

/// Tests reading an existing wallet.
///
/// Expected: Ok(Some) with the stored balance
#[tokio::test]
async fn returns_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::create_funded_user(db, 250).await?;

    let account = LedgerRepository::new(db).find_account(user.id).await?;

    let account = account.unwrap();
    assert_eq!(account.user_id, user.id);
    assert_eq!(account.balance, 250);
    assert!(account.updated_at.is_some());

    Ok(())
}

/// Tests that reading a missing wallet does not create it.
///
/// Expected: Ok(None) and no wallet row afterwards
#[tokio::test]
async fn does_not_create_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_linked_user(db).await?;

    let account = LedgerRepository::new(db).find_account(user.id).await?;

    assert!(account.is_none());
    assert_eq!(entity::prelude::Wallet::find().count(db).await?, 0);

    Ok(())
}

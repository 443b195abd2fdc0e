use super::*;

/// Tests lazily creating a wallet on first use.
///
/// Expected: Ok with balance 0 and one wallet row
#[tokio::test]
async fn creates_empty_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_linked_user(db).await?;

    let account = LedgerRepository::new(db).ensure_account(user.id).await?;

    assert_eq!(account.user_id, user.id);
    assert_eq!(account.balance, 0);
    assert_eq!(entity::prelude::Wallet::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an existing wallet is returned untouched.
///
/// Expected: Ok with the existing balance and still one wallet row
#[tokio::test]
async fn keeps_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::create_funded_user(db, 75).await?;

    let repo = LedgerRepository::new(db);
    let first = repo.ensure_account(user.id).await?;
    let second = repo.ensure_account(user.id).await?;

    assert_eq!(first.balance, 75);
    assert_eq!(second, first);
    assert_eq!(entity::prelude::Wallet::find().count(db).await?, 1);

    Ok(())
}

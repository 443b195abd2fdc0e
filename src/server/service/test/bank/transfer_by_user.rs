use super::*;
use test_utils::factory::user::UserFactory;

/// Tests the basic transfer scenario.
///
/// A holds 100 and B holds 0; A sends 30 to B.
///
/// Expected: A=70, B=30, and one TRANSFER entry on each side with opposite signs
#[tokio::test]
async fn moves_funds_and_records_both_legs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, _) = factory::create_funded_user(db, 100).await?;
    let (receiver, receiver_link, _) = factory::create_funded_user(db, 0).await?;

    let account = BankService::new(db, LedgerLimits::default())
        .transfer_by_user(
            &Principal::User(sender.id),
            UserTransferParam {
                target: AccountRef::discord(receiver_link.uid),
                amount: 30,
            },
        )
        .await?;

    assert_eq!(account.user_id, sender.id);
    assert_eq!(account.balance, 70);
    assert_eq!(balance_of(db, sender.id).await, 70);
    assert_eq!(balance_of(db, receiver.id).await, 30);

    let sent = entries_of(db, sender.id).await;
    let received = entries_of(db, receiver.id).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(received.len(), 1);
    assert_eq!(sent[0].amount, -30);
    assert_eq!(received[0].amount, 30);
    assert_eq!(sent[0].kind, "TRANSFER");
    assert_eq!(received[0].kind, "TRANSFER");
    assert_eq!(
        sent[0].description,
        Some(format!("Transfer to {}", receiver.username))
    );
    assert_eq!(
        received[0].description,
        Some(format!("Transfer from {}", sender.username))
    );

    Ok(())
}

/// Tests sending to a username.
///
/// The receiver has never held money, so their wallet is created by the transfer.
///
/// Expected: Ok and receiver balance 15
#[tokio::test]
async fn sends_to_username_and_creates_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, _) = factory::create_funded_user(db, 20).await?;
    let receiver = UserFactory::new(db).username("alex").build().await?;

    BankService::new(db, LedgerLimits::default())
        .transfer_by_user(
            &Principal::User(sender.id),
            UserTransferParam {
                target: AccountRef::Username("alex".to_string()),
                amount: 15,
            },
        )
        .await?;

    assert_eq!(balance_of(db, sender.id).await, 5);
    assert_eq!(balance_of(db, receiver.id).await, 15);

    Ok(())
}

/// Tests that sending to yourself always fails.
///
/// Checked with enough and with too little balance, by Discord id and by username.
///
/// Expected: Err(SelfTransferNotAllowed) every time and no entries
#[tokio::test]
async fn rejects_self_transfer_regardless_of_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, link, _) = factory::create_funded_user(db, 50).await?;

    let service = BankService::new(db, LedgerLimits::default());

    for (target, amount) in [
        (AccountRef::discord(link.uid.clone()), 10),
        (AccountRef::discord(link.uid.clone()), 500),
        (AccountRef::Username(user.username.clone()), 10),
    ] {
        let result = service
            .transfer_by_user(&Principal::User(user.id), UserTransferParam { target, amount })
            .await;

        assert!(matches!(
            result,
            Err(AppError::LedgerErr(LedgerError::SelfTransferNotAllowed))
        ));
    }

    assert_eq!(balance_of(db, user.id).await, 50);
    assert!(entries_of(db, user.id).await.is_empty());

    Ok(())
}

/// Tests sending more than the sender holds.
///
/// Expected: Err(InsufficientFunds) with neither balance changed
#[tokio::test]
async fn rejects_insufficient_funds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, _) = factory::create_funded_user(db, 10).await?;
    let (receiver, receiver_link, _) = factory::create_funded_user(db, 5).await?;

    let result = BankService::new(db, LedgerLimits::default())
        .transfer_by_user(
            &Principal::User(sender.id),
            UserTransferParam {
                target: AccountRef::discord(receiver_link.uid),
                amount: 11,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientFunds))
    ));
    assert_eq!(balance_of(db, sender.id).await, 10);
    assert_eq!(balance_of(db, receiver.id).await, 5);

    Ok(())
}

/// Tests sending to someone who does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_recipient_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, _) = factory::create_funded_user(db, 10).await?;

    let result = BankService::new(db, LedgerLimits::default())
        .transfer_by_user(
            &Principal::User(sender.id),
            UserTransferParam {
                target: AccountRef::Username("nobody".to_string()),
                amount: 5,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(balance_of(db, sender.id).await, 10);

    Ok(())
}

/// Tests that the service cannot act as a user.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn service_cannot_use_user_transfer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, receiver_link, _) = factory::create_funded_user(db, 0).await?;

    let result = BankService::new(db, LedgerLimits::default())
        .transfer_by_user(
            &Principal::Service,
            UserTransferParam {
                target: AccountRef::discord(receiver_link.uid),
                amount: 5,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests that transfers conserve money.
///
/// Runs a round of transfers between three accounts, including rejected ones.
///
/// Expected: total across all accounts stays 300
#[tokio::test]
async fn conserves_total_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (a, a_link, _) = factory::create_funded_user(db, 100).await?;
    let (b, b_link, _) = factory::create_funded_user(db, 100).await?;
    let (c, c_link, _) = factory::create_funded_user(db, 100).await?;

    let service = BankService::new(db, LedgerLimits::default());

    let moves = [
        (a.id, &b_link.uid, 30),
        (b.id, &c_link.uid, 130),
        (c.id, &a_link.uid, 500),
        (c.id, &a_link.uid, 45),
        (a.id, &c_link.uid, 115),
    ];

    for (sender_id, target, amount) in moves {
        let before = (
            balance_of(db, sender_id).await,
            balance_of(db, a.id).await + balance_of(db, b.id).await + balance_of(db, c.id).await,
        );

        let _ = service
            .transfer_by_user(
                &Principal::User(sender_id),
                UserTransferParam {
                    target: AccountRef::discord(target.clone()),
                    amount,
                },
            )
            .await;

        let total =
            balance_of(db, a.id).await + balance_of(db, b.id).await + balance_of(db, c.id).await;
        assert_eq!(total, before.1);
        assert!(balance_of(db, sender_id).await >= 0);
        assert!(balance_of(db, sender_id).await <= before.0);
    }

    assert_eq!(balance_of(db, a.id).await, 0);
    assert_eq!(balance_of(db, b.id).await, 0);
    assert_eq!(balance_of(db, c.id).await, 300);

    Ok(())
}

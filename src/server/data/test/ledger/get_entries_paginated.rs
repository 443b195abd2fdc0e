use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::ledger_entry::LedgerEntryFactory;

/// Tests that history is returned newest first.
///
/// Expected: Ok with entries ordered by descending created_at
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_linked_user(db).await?;
    let now = Utc::now();

    let oldest = LedgerEntryFactory::new(db, user.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = LedgerEntryFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;
    let middle = LedgerEntryFactory::new(db, user.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let (entries, total) = LedgerRepository::new(db)
        .get_entries_paginated(user.id, 0, 10)
        .await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests paging through history and isolation between users.
///
/// Expected: Ok with page sizes 2, 2, 1 and total counting only this user's entries
#[tokio::test]
async fn paginates_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_linked_user(db).await?;
    let (other, _) = factory::create_linked_user(db).await?;

    for i in 0..5 {
        LedgerEntryFactory::new(db, user.id)
            .amount(i + 1)
            .build()
            .await?;
    }
    LedgerEntryFactory::new(db, other.id).build().await?;

    let repo = LedgerRepository::new(db);

    let (page0, total) = repo.get_entries_paginated(user.id, 0, 2).await?;
    let (page1, _) = repo.get_entries_paginated(user.id, 1, 2).await?;
    let (page2, _) = repo.get_entries_paginated(user.id, 2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(page0.len(), 2);
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);
    assert!(page0
        .iter()
        .chain(&page1)
        .chain(&page2)
        .all(|e| e.user_id == user.id));

    Ok(())
}

/// Tests that a stored entry with an unrecognized kind surfaces as an internal error.
///
/// Expected: Err(InternalError::UnknownEntryKind)
#[tokio::test]
async fn fails_on_unknown_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_linked_user(db).await?;
    LedgerEntryFactory::new(db, user.id)
        .kind("REFUND")
        .build()
        .await?;

    let result = LedgerRepository::new(db)
        .get_entries_paginated(user.id, 0, 10)
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::UnknownEntryKind { .. }))
    ));

    Ok(())
}

use super::*;

/// Tests recording when a user was last seen.
///
/// Expected: last_seen_at goes from None to Some
#[tokio::test]
async fn sets_last_seen() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    assert!(user.last_seen_at.is_none());

    let repo = UserRepository::new(db);
    repo.touch_last_seen(user.id).await?;

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert!(user.last_seen_at.is_some());

    Ok(())
}

/// Tests touching a user that does not exist.
///
/// Expected: Ok(()) with nothing changed
#[tokio::test]
async fn ignores_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserRepository::new(db).touch_last_seen(404).await?;

    Ok(())
}

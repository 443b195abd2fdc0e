use super::*;
use test_utils::factory::social_account::{create_discord_link_with_uid, SocialAccountFactory};

/// Tests finding the user behind a Discord id.
///
/// Expected: Ok(Some) with the linked user
#[tokio::test]
async fn finds_linked_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    create_discord_link_with_uid(db, user.id, "123456789").await?;

    let found = SocialAccountRepository::new(db)
        .find_user_by_uid(Provider::Discord, "123456789")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an unknown uid resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_linked_user(db).await?;

    let found = SocialAccountRepository::new(db)
        .find_user_by_uid(Provider::Discord, "999")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the provider is part of the match.
///
/// A uid linked under another provider must not resolve as a Discord id.
///
/// Expected: Ok(None) for Discord, while uid_exists is also false
#[tokio::test]
async fn ignores_other_providers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    SocialAccountFactory::new(db, user.id)
        .provider("github")
        .uid("555")
        .build()
        .await?;

    let repo = SocialAccountRepository::new(db);

    assert!(repo
        .find_user_by_uid(Provider::Discord, "555")
        .await?
        .is_none());
    assert!(!repo.uid_exists(Provider::Discord, "555").await?);

    Ok(())
}

/// Tests that repeated lookups agree.
///
/// Expected: both lookups return the same user id
#[tokio::test]
async fn lookups_are_stable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, link) = factory::create_linked_user(db).await?;

    let repo = SocialAccountRepository::new(db);
    let first = repo.find_user_by_uid(Provider::Discord, &link.uid).await?;
    let second = repo.find_user_by_uid(Provider::Discord, &link.uid).await?;

    assert!(first.is_some());
    assert_eq!(first, second);

    Ok(())
}

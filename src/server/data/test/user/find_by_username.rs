use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding a user by exact username.
///
/// Expected: Ok(Some) for the exact name, Ok(None) for a different one
#[tokio::test]
async fn finds_exact_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).username("steve").build().await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_username("steve").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_username("alex").await?.is_none());

    Ok(())
}

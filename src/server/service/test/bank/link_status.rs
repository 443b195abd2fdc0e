use super::*;

/// Tests reporting whether a Discord id is linked.
///
/// Expected: true for a linked id, false otherwise, and AccessDenied for users
#[tokio::test]
async fn reports_link_status_to_service_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bank_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, link) = factory::create_linked_user(db).await?;

    let service = BankService::new(db, LedgerLimits::default());

    assert!(service.link_status(&Principal::Service, &link.uid).await?);
    assert!(!service.link_status(&Principal::Service, "1").await?);
    assert!(matches!(
        service.link_status(&Principal::User(user.id), &link.uid).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

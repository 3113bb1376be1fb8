use super::*;

/// Tests creating a record through the lifecycle service.
///
/// Expected: Ok with an active record whose password is not stored in plain text
#[tokio::test]
async fn creates_active_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LifecycleService::<AdminResource>::new(db);
    let admin = service.create(dwight()).await?;

    assert_eq!(AdminResource::summary(&admin), "Dwight");
    assert!(!admin.person.deleted);
    assert_ne!(admin.person.password_hash, "3p8s8R3KdW");

    let listed = service.list_active().await?;
    assert_eq!(listed.len(), 1);

    Ok(())
}

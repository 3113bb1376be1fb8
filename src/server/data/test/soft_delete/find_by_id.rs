use super::*;

/// Tests looking up an active record.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_active_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .first_name("Dwight")
        .last_name("Schrute")
        .build()
        .await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let found = repo.find_by_id(admin.id).await?.unwrap();

    assert_eq!(found.person.first_name, "Dwight");
    assert_eq!(found.person.last_name, "Schrute");
    assert_eq!(found.person.dni, admin.dni);

    Ok(())
}

/// Tests that lookup ignores the deleted flag.
///
/// Expected: Ok(Some) with `deleted` set
#[tokio::test]
async fn finds_deleted_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_deleted_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let found = repo.find_by_id(admin.id).await?.unwrap();

    assert!(found.person.deleted);

    Ok(())
}

/// Tests looking up an id that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

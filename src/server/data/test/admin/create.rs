use super::*;

/// Tests inserting an admin.
///
/// Verifies that the record gets an id, starts active and stores the
/// password as a hash.
///
/// Expected: Ok with the stored admin
#[tokio::test]
async fn creates_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admin = repo.create(create_param()).await?;

    assert!(admin.person.id > 0);
    assert_eq!(admin.person.first_name, "Michael");
    assert_eq!(admin.person.last_name, "Scott");
    assert_eq!(admin.person.city.as_deref(), Some("Scranton"));
    assert!(!admin.person.deleted);

    let stored = AdminEntity::find_by_id(admin.person.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "3p8s8R3KdW");
    assert!(verify_password("3p8s8R3KdW", &stored.password));

    Ok(())
}

/// Tests that consecutive inserts get increasing ids.
///
/// Expected: Ok with the second id greater than the first
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let first = repo.create(create_param()).await?;
    let second = repo.create(create_param()).await?;

    assert!(second.person.id > first.person.id);

    Ok(())
}

use super::*;

/// Tests listing when every record is active.
///
/// Verifies that all records are returned in id order.
///
/// Expected: Ok with every record, ordered by id
#[tokio::test]
async fn returns_active_records_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_admin(db).await?;
    let second = factory::create_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let admins = repo.find_active().await?;

    let ids: Vec<i32> = admins.iter().map(|a| a.person.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that soft-deleted records are left out of the listing.
///
/// Expected: Ok with only the active record
#[tokio::test]
async fn excludes_deleted_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_admin(db).await?;
    factory::create_deleted_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let admins = repo.find_active().await?;

    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].person.id, active.id);
    assert!(!admins[0].person.deleted);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<Class>::new(db);
    let classes = repo.find_active().await?;

    assert!(classes.is_empty());

    Ok(())
}

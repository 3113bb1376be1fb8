use super::*;

/// Tests soft-deleting an active record.
///
/// Verifies that the flag is flipped in the database.
///
/// Expected: Ok(Transition::Applied)
#[tokio::test]
async fn deletes_active_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let transition = repo.set_deleted(admin.id, true).await?;

    assert_eq!(transition, Transition::Applied);

    let stored = AdminEntity::find_by_id(admin.id).one(db).await?.unwrap();
    assert!(stored.deleted);

    Ok(())
}

/// Tests soft-deleting a record twice.
///
/// Expected: Ok(Transition::Unchanged) on the second call
#[tokio::test]
async fn second_delete_is_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    repo.set_deleted(admin.id, true).await?;
    let transition = repo.set_deleted(admin.id, true).await?;

    assert_eq!(transition, Transition::Unchanged);

    Ok(())
}

/// Tests recovering a record that was never deleted.
///
/// Expected: Ok(Transition::Unchanged) and the record stays active
#[tokio::test]
async fn recovering_active_record_is_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let repo = SoftDeleteRepository::<Class>::new(db);
    let transition = repo.set_deleted(class.id, false).await?;

    assert_eq!(transition, Transition::Unchanged);

    let stored = ClassEntity::find_by_id(class.id).one(db).await?.unwrap();
    assert!(!stored.deleted);

    Ok(())
}

/// Tests recovering a deleted record.
///
/// Expected: Ok(Transition::Applied) and the record is active again
#[tokio::test]
async fn recovers_deleted_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::ClassFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = SoftDeleteRepository::<Class>::new(db);
    let transition = repo.set_deleted(class.id, false).await?;

    assert_eq!(transition, Transition::Applied);

    let stored = ClassEntity::find_by_id(class.id).one(db).await?.unwrap();
    assert!(!stored.deleted);

    Ok(())
}

/// Tests toggling the flag of an id that does not exist.
///
/// Expected: Ok(Transition::Missing) for both directions
#[tokio::test]
async fn reports_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<Admin>::new(db);

    assert_eq!(repo.set_deleted(42, true).await?, Transition::Missing);
    assert_eq!(repo.set_deleted(42, false).await?, Transition::Missing);

    Ok(())
}

/// Tests that toggling one record leaves the others untouched.
///
/// Expected: Ok with only the targeted record deleted
#[tokio::test]
async fn only_touches_target_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_admin(db).await?;
    let other = factory::create_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    repo.set_deleted(target.id, true).await?;

    let other = AdminEntity::find_by_id(other.id).one(db).await?.unwrap();
    assert!(!other.deleted);

    Ok(())
}

use super::*;
use sea_orm::PaginatorTrait;

/// Tests purging a table holding both active and deleted records.
///
/// Verifies that exactly the deleted records are physically removed.
///
/// Expected: Ok with the count of deleted records
#[tokio::test]
async fn removes_only_deleted_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_admin(db).await?;
    let deleted1 = factory::create_deleted_admin(db).await?;
    let deleted2 = factory::create_deleted_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);
    let removed = repo.purge().await?;

    assert_eq!(removed, 2);
    assert!(AdminEntity::find_by_id(active.id).one(db).await?.is_some());
    assert!(AdminEntity::find_by_id(deleted1.id).one(db).await?.is_none());
    assert!(AdminEntity::find_by_id(deleted2.id).one(db).await?.is_none());

    Ok(())
}

/// Tests purging when nothing is flagged deleted.
///
/// Expected: Ok(0) and no record removed
#[tokio::test]
async fn returns_zero_when_nothing_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let repo = SoftDeleteRepository::<Admin>::new(db);

    assert_eq!(repo.purge().await?, 0);
    assert_eq!(AdminEntity::find().count(db).await?, 1);

    Ok(())
}

/// Tests purging twice in a row.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn second_purge_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::ClassFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = SoftDeleteRepository::<Class>::new(db);

    assert_eq!(repo.purge().await?, 1);
    assert_eq!(repo.purge().await?, 0);

    Ok(())
}

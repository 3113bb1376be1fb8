use super::*;
use sea_orm::ActiveValue;

/// Tests writing a single column.
///
/// Verifies that only the set column changes and the result is re-read from
/// the database.
///
/// Expected: Ok(Some) with the new value and the other fields intact
#[tokio::test]
async fn writes_only_set_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let model = entity::class::ActiveModel {
        slots: ActiveValue::Set(35),
        ..Default::default()
    };

    let repo = SoftDeleteRepository::<Class>::new(db);
    let updated = repo.update_fields(class.id, model).await?.unwrap();

    assert_eq!(updated.slots, 35);
    assert_eq!(updated.day, class.day);
    assert_eq!(updated.hour, class.hour);
    assert_eq!(updated.trainer_id, class.trainer_id);

    Ok(())
}

/// Tests an update that sets no column.
///
/// Expected: Ok(Some) with the stored record unchanged
#[tokio::test]
async fn empty_update_returns_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let repo = SoftDeleteRepository::<Class>::new(db);
    let updated = repo
        .update_fields(class.id, entity::class::ActiveModel::default())
        .await?
        .unwrap();

    assert_eq!(updated.slots, class.slots);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None), both with and without columns set
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<Class>::new(db);

    let model = entity::class::ActiveModel {
        slots: ActiveValue::Set(35),
        ..Default::default()
    };
    assert!(repo.update_fields(7, model).await?.is_none());
    assert!(repo
        .update_fields(7, entity::class::ActiveModel::default())
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleted records can still be updated and stay deleted.
///
/// Expected: Ok(Some) with the change applied and `deleted` still set
#[tokio::test]
async fn keeps_deleted_flag() -> Result<(), DbErr> {
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

    let model = entity::class::ActiveModel {
        day: ActiveValue::Set("Friday".to_string()),
        ..Default::default()
    };

    let repo = SoftDeleteRepository::<Class>::new(db);
    let updated = repo.update_fields(class.id, model).await?.unwrap();

    assert_eq!(updated.day, "Friday");
    assert!(updated.deleted);

    Ok(())
}

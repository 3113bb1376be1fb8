use super::*;

/// Tests moving a class to another trainer.
///
/// Expected: Ok(Some) with only the trainer changed
#[tokio::test]
async fn reassigns_trainer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let param = UpdateClassParam {
        trainer_id: Some(5),
        ..Default::default()
    };

    let repo = ClassRepository::new(db);
    let updated = repo.update(class.id, param).await?.unwrap();

    assert_eq!(updated.trainer_id, 5);
    assert_eq!(updated.activity_id, class.activity_id);
    assert_eq!(updated.schedule(), "Monday 18:30");

    Ok(())
}

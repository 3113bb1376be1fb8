use super::*;

/// Tests inserting a class referencing ids that do not exist.
///
/// Trainer and activity are not checked, so the insert succeeds.
///
/// Expected: Ok with the stored class
#[tokio::test]
async fn creates_class_without_referenced_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ClassEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateClassParam {
        day: "Wednesday".to_string(),
        hour: "07:15".to_string(),
        trainer_id: 77,
        activity_id: 88,
        slots: 12,
    };

    let repo = ClassRepository::new(db);
    let class = repo.create(param).await?;

    assert_eq!(class.schedule(), "Wednesday 07:15");
    assert_eq!(class.trainer_id, 77);
    assert_eq!(class.activity_id, 88);
    assert_eq!(class.slots, 12);
    assert!(!class.deleted);

    Ok(())
}

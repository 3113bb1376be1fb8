use super::*;

/// Tests updating trainer-specific and person fields together.
///
/// Expected: Ok(Some) with salary, is_active and city changed
#[tokio::test]
async fn changes_trainer_and_person_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TrainerEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;

    let param = UpdateTrainerParam {
        person: UpdatePersonParam {
            city: Some("Stamford".to_string()),
            ..Default::default()
        },
        salary: Some("$90000.00".to_string()),
        is_active: Some(false),
    };

    let repo = TrainerRepository::new(db);
    let updated = repo.update(trainer.id, param).await?.unwrap();

    assert_eq!(updated.salary.as_deref(), Some("$90000.00"));
    assert!(!updated.is_active);
    assert_eq!(updated.person.city.as_deref(), Some("Stamford"));
    assert_eq!(updated.person.first_name, trainer.first_name);

    Ok(())
}

/// Tests that updating a deleted trainer keeps it deleted.
///
/// Expected: Ok(Some) with `deleted` still set
#[tokio::test]
async fn keeps_deleted_trainer_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TrainerEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_deleted_trainer(db).await?;

    let param = UpdateTrainerParam {
        is_active: Some(false),
        ..Default::default()
    };

    let repo = TrainerRepository::new(db);
    let updated = repo.update(trainer.id, param).await?.unwrap();

    assert!(updated.person.deleted);

    Ok(())
}

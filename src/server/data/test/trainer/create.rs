use super::*;

/// Tests inserting a trainer with a salary.
///
/// Expected: Ok with the stored trainer, active and not deleted
#[tokio::test]
async fn creates_trainer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TrainerEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateTrainerParam {
        person: CreatePersonParam {
            first_name: "Dwight".to_string(),
            last_name: "Schrute".to_string(),
            dni: "38987654".to_string(),
            phone: Some("1155551234".to_string()),
            email: "dwight@schrutefarms.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            city: None,
        },
        salary: Some("$85000.43".to_string()),
        is_active: true,
    };

    let repo = TrainerRepository::new(db);
    let trainer = repo.create(param).await?;

    assert_eq!(trainer.person.first_name, "Dwight");
    assert_eq!(trainer.person.last_name, "Schrute");
    assert_eq!(trainer.salary.as_deref(), Some("$85000.43"));
    assert!(trainer.is_active);
    assert!(!trainer.person.deleted);

    Ok(())
}

use super::*;

/// Tests updating a single field.
///
/// Expected: Ok(Some) with only `dni` changed
#[tokio::test]
async fn changes_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .city("Scranton")
        .build()
        .await?;

    let param = UpdatePersonParam {
        dni: Some("40111222".to_string()),
        ..Default::default()
    };

    let repo = AdminRepository::new(db);
    let updated = repo.update(admin.id, param).await?.unwrap();

    assert_eq!(updated.person.dni, "40111222");
    assert_eq!(updated.person.first_name, admin.first_name);
    assert_eq!(updated.person.email, admin.email);
    assert_eq!(updated.person.city.as_deref(), Some("Scranton"));
    assert_eq!(updated.person.password_hash, admin.password);

    Ok(())
}

/// Tests that a new password is stored hashed.
///
/// Expected: Ok(Some) with a hash matching the new password
#[tokio::test]
async fn rehashes_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AdminEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let param = UpdatePersonParam::from_dto(UpdatePersonDto {
        password: Some("n3wPassw0rd".to_string()),
        ..Default::default()
    })
    .unwrap();

    let repo = AdminRepository::new(db);
    let updated = repo.update(admin.id, param).await?.unwrap();

    assert!(verify_password("n3wPassw0rd", &updated.person.password_hash));

    Ok(())
}

/// Tests updating an admin that does not exist.
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

    let param = UpdatePersonParam {
        first_name: Some("Toby".to_string()),
        ..Default::default()
    };

    let repo = AdminRepository::new(db);
    let updated = repo.update(12, param).await?;

    assert!(updated.is_none());

    Ok(())
}

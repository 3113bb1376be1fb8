use super::*;

/// Tests inserting an activity without an explicit `is_active`.
///
/// Expected: Ok with the activity active and not deleted
#[tokio::test]
async fn creates_active_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ActivityEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateActivityParam::from(CreateActivityDto {
        name: "Spinning".to_string(),
        description: None,
        is_active: None,
    });

    let repo = ActivityRepository::new(db);
    let activity = repo.create(param).await?;

    assert_eq!(activity.name, "Spinning");
    assert!(activity.description.is_none());
    assert!(activity.is_active);
    assert!(!activity.deleted);

    Ok(())
}

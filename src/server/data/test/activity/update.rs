use super::*;

/// Tests renaming an activity.
///
/// Expected: Ok(Some) with the new name and the description untouched
#[tokio::test]
async fn renames_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ActivityEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let param = UpdateActivityParam {
        name: Some("Yoga".to_string()),
        ..Default::default()
    };

    let repo = ActivityRepository::new(db);
    let updated = repo.update(activity.id, param).await?.unwrap();

    assert_eq!(updated.name, "Yoga");
    assert_eq!(updated.description, activity.description);

    Ok(())
}

use super::*;

/// Tests moving a subscription to another date.
///
/// Expected: Ok(Some) with the new date
#[tokio::test]
async fn changes_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SubscriptionEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscription = factory::create_subscription(db).await?;
    let date = NaiveDate::from_ymd_opt(2023, 7, 3).unwrap();

    let param = UpdateSubscriptionParam {
        date: Some(date),
        ..Default::default()
    };

    let repo = SubscriptionRepository::new(db);
    let updated = repo.update(subscription.id, param).await?.unwrap();

    assert_eq!(updated.date, date);
    assert_eq!(updated.class_id, subscription.class_id);
    assert_eq!(updated.member_id, subscription.member_id);

    Ok(())
}

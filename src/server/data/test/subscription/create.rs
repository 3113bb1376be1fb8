use super::*;

/// Tests inserting a subscription.
///
/// Expected: Ok with class, member and date stored
#[tokio::test]
async fn creates_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SubscriptionEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2023, 6, 12).unwrap();
    let param = CreateSubscriptionParam {
        class_id: 3,
        member_id: 9,
        date,
    };

    let repo = SubscriptionRepository::new(db);
    let subscription = repo.create(param).await?;

    assert_eq!(subscription.class_id, 3);
    assert_eq!(subscription.member_id, 9);
    assert_eq!(subscription.date, date);
    assert!(!subscription.deleted);

    Ok(())
}

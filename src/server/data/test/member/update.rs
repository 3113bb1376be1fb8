use super::*;

/// Tests changing membership and birth day.
///
/// Expected: Ok(Some) with both changed and the name untouched
#[tokio::test]
async fn changes_membership_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MemberEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let param = UpdateMemberParam {
        membership: Some("Only Classes".to_string()),
        birth_day: NaiveDate::from_ymd_opt(1980, 1, 1),
        ..Default::default()
    };

    let repo = MemberRepository::new(db);
    let updated = repo.update(member.id, param).await?.unwrap();

    assert_eq!(updated.membership, "Only Classes");
    assert_eq!(updated.birth_day, NaiveDate::from_ymd_opt(1980, 1, 1));
    assert_eq!(updated.person.first_name, member.first_name);

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MemberEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = UpdateMemberParam {
        membership: Some("Black".to_string()),
        ..Default::default()
    };

    let repo = MemberRepository::new(db);

    assert!(repo.update(3, param).await?.is_none());

    Ok(())
}

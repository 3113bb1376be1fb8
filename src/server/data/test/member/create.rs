use super::*;

/// Tests inserting a member without a membership.
///
/// Expected: Ok with the default membership and `is_active` set
#[tokio::test]
async fn defaults_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MemberEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateMemberParam::from_dto(create_dto(None)).unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(param).await?;

    assert_eq!(member.membership, DEFAULT_MEMBERSHIP);
    assert!(member.is_active);
    assert_eq!(member.birth_day, NaiveDate::from_ymd_opt(1979, 3, 25));
    assert_eq!(member.postal_code.as_deref(), Some("18503"));

    Ok(())
}

/// Tests inserting a member with an explicit membership.
///
/// Expected: Ok with the given membership
#[tokio::test]
async fn keeps_given_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MemberEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateMemberParam::from_dto(create_dto(Some("Black"))).unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(param).await?;

    assert_eq!(member.membership, "Black");

    Ok(())
}

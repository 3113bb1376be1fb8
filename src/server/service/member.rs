use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    server::{
        data::member::MemberRepository,
        error::AppError,
        model::member::{CreateMemberParam, Member, UpdateMemberParam},
        service::resource::Resource,
    },
};

pub struct MemberResource;

#[async_trait]
impl Resource for MemberResource {
    const NAME: &'static str = "Member";
    const COLLECTION: &'static str = "members";

    type Record = Member;
    type CreateDto = CreateMemberDto;
    type UpdateDto = UpdateMemberDto;
    type Dto = MemberDto;

    fn summary(record: &Member) -> String {
        record.person.first_name.clone()
    }

    fn into_dto(record: Member) -> MemberDto {
        record.into_dto()
    }

    async fn insert(db: &DatabaseConnection, dto: CreateMemberDto) -> Result<Member, AppError> {
        let param = CreateMemberParam::from_dto(dto)?;

        Ok(MemberRepository::new(db).create(param).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdateMemberDto,
    ) -> Result<Option<Member>, AppError> {
        let param = UpdateMemberParam::from_dto(dto)?;

        Ok(MemberRepository::new(db).update(id, param).await?)
    }
}

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::person::{CreatePersonDto, PersonDto, UpdatePersonDto},
    server::{
        data::admin::AdminRepository,
        error::AppError,
        model::{
            admin::Admin,
            person::{CreatePersonParam, UpdatePersonParam},
        },
        service::resource::Resource,
    },
};

pub struct AdminResource;

#[async_trait]
impl Resource for AdminResource {
    const NAME: &'static str = "Admin";
    const COLLECTION: &'static str = "admins";

    type Record = Admin;
    type CreateDto = CreatePersonDto;
    type UpdateDto = UpdatePersonDto;
    type Dto = PersonDto;

    fn summary(record: &Admin) -> String {
        record.person.first_name.clone()
    }

    fn into_dto(record: Admin) -> PersonDto {
        record.into_dto()
    }

    async fn insert(db: &DatabaseConnection, dto: CreatePersonDto) -> Result<Admin, AppError> {
        let param = CreatePersonParam::from_dto(dto)?;

        Ok(AdminRepository::new(db).create(param).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdatePersonDto,
    ) -> Result<Option<Admin>, AppError> {
        let param = UpdatePersonParam::from_dto(dto)?;

        Ok(AdminRepository::new(db).update(id, param).await?)
    }
}

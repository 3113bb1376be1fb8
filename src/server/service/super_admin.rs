use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::person::{CreatePersonDto, PersonDto, UpdatePersonDto},
    server::{
        data::super_admin::SuperAdminRepository,
        error::AppError,
        model::{
            person::{CreatePersonParam, UpdatePersonParam},
            super_admin::SuperAdmin,
        },
        service::resource::Resource,
    },
};

pub struct SuperAdminResource;

#[async_trait]
impl Resource for SuperAdminResource {
    const NAME: &'static str = "Super admin";
    const COLLECTION: &'static str = "super admins";

    type Record = SuperAdmin;
    type CreateDto = CreatePersonDto;
    type UpdateDto = UpdatePersonDto;
    type Dto = PersonDto;

    fn summary(record: &SuperAdmin) -> String {
        record.person.first_name.clone()
    }

    fn into_dto(record: SuperAdmin) -> PersonDto {
        record.into_dto()
    }

    async fn insert(db: &DatabaseConnection, dto: CreatePersonDto) -> Result<SuperAdmin, AppError> {
        let param = CreatePersonParam::from_dto(dto)?;

        Ok(SuperAdminRepository::new(db).create(param).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdatePersonDto,
    ) -> Result<Option<SuperAdmin>, AppError> {
        let param = UpdatePersonParam::from_dto(dto)?;

        Ok(SuperAdminRepository::new(db).update(id, param).await?)
    }
}

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::class::{ClassDto, CreateClassDto, UpdateClassDto},
    server::{
        data::class::ClassRepository, error::AppError, model::class::Class,
        service::resource::Resource,
    },
};

pub struct ClassResource;

#[async_trait]
impl Resource for ClassResource {
    const NAME: &'static str = "Class";
    const COLLECTION: &'static str = "classes";

    type Record = Class;
    type CreateDto = CreateClassDto;
    type UpdateDto = UpdateClassDto;
    type Dto = ClassDto;

    fn summary(record: &Class) -> String {
        record.schedule()
    }

    fn into_dto(record: Class) -> ClassDto {
        record.into_dto()
    }

    async fn insert(db: &DatabaseConnection, dto: CreateClassDto) -> Result<Class, AppError> {
        Ok(ClassRepository::new(db).create(dto.into()).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdateClassDto,
    ) -> Result<Option<Class>, AppError> {
        Ok(ClassRepository::new(db).update(id, dto.into()).await?)
    }
}

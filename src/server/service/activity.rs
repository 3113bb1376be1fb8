use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::activity::{ActivityDto, CreateActivityDto, UpdateActivityDto},
    server::{
        data::activity::ActivityRepository, error::AppError, model::activity::Activity,
        service::resource::Resource,
    },
};

pub struct ActivityResource;

#[async_trait]
impl Resource for ActivityResource {
    const NAME: &'static str = "Activity";
    const COLLECTION: &'static str = "activities";

    type Record = Activity;
    type CreateDto = CreateActivityDto;
    type UpdateDto = UpdateActivityDto;
    type Dto = ActivityDto;

    fn summary(record: &Activity) -> String {
        record.name.clone()
    }

    fn into_dto(record: Activity) -> ActivityDto {
        record.into_dto()
    }

    async fn insert(db: &DatabaseConnection, dto: CreateActivityDto) -> Result<Activity, AppError> {
        Ok(ActivityRepository::new(db).create(dto.into()).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdateActivityDto,
    ) -> Result<Option<Activity>, AppError> {
        Ok(ActivityRepository::new(db).update(id, dto.into()).await?)
    }
}

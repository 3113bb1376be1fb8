use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::trainer::{CreateTrainerDto, TrainerDto, UpdateTrainerDto},
    server::{
        data::trainer::TrainerRepository,
        error::AppError,
        model::trainer::{CreateTrainerParam, Trainer, UpdateTrainerParam},
        service::resource::Resource,
    },
};

pub struct TrainerResource;

#[async_trait]
impl Resource for TrainerResource {
    const NAME: &'static str = "Trainer";
    const COLLECTION: &'static str = "trainers";

    type Record = Trainer;
    type CreateDto = CreateTrainerDto;
    type UpdateDto = UpdateTrainerDto;
    type Dto = TrainerDto;

    fn summary(record: &Trainer) -> String {
        record.person.first_name.clone()
    }

    fn into_dto(record: Trainer) -> TrainerDto {
        record.into_dto()
    }

    async fn insert(db: &DatabaseConnection, dto: CreateTrainerDto) -> Result<Trainer, AppError> {
        let param = CreateTrainerParam::from_dto(dto)?;

        Ok(TrainerRepository::new(db).create(param).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdateTrainerDto,
    ) -> Result<Option<Trainer>, AppError> {
        let param = UpdateTrainerParam::from_dto(dto)?;

        Ok(TrainerRepository::new(db).update(id, param).await?)
    }
}

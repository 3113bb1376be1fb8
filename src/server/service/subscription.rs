use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::subscription::{CreateSubscriptionDto, SubscriptionDto, UpdateSubscriptionDto},
    server::{
        data::subscription::SubscriptionRepository, error::AppError,
        model::subscription::Subscription, service::resource::Resource,
    },
};

pub struct SubscriptionResource;

#[async_trait]
impl Resource for SubscriptionResource {
    const NAME: &'static str = "Subscription";
    const COLLECTION: &'static str = "subscriptions";

    type Record = Subscription;
    type CreateDto = CreateSubscriptionDto;
    type UpdateDto = UpdateSubscriptionDto;
    type Dto = SubscriptionDto;

    fn summary(record: &Subscription) -> String {
        format!(
            "member {} in class {} on {}",
            record.member_id, record.class_id, record.date
        )
    }

    fn into_dto(record: Subscription) -> SubscriptionDto {
        record.into_dto()
    }

    async fn insert(
        db: &DatabaseConnection,
        dto: CreateSubscriptionDto,
    ) -> Result<Subscription, AppError> {
        Ok(SubscriptionRepository::new(db).create(dto.into()).await?)
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: UpdateSubscriptionDto,
    ) -> Result<Option<Subscription>, AppError> {
        Ok(SubscriptionRepository::new(db)
            .update(id, dto.into())
            .await?)
    }
}

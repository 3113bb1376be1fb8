use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        set_if,
        soft_delete::{Record, SoftDeleteRepository},
    },
    model::subscription::{CreateSubscriptionParam, Subscription, UpdateSubscriptionParam},
};

/// Repository providing inserts and partial updates for subscriptions.
pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new subscription with `deleted` set to false.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The stored subscription with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSubscriptionParam) -> Result<Subscription, DbErr> {
        let entity = entity::subscription::ActiveModel {
            class_id: ActiveValue::Set(param.class_id),
            member_id: ActiveValue::Set(param.member_id),
            date: ActiveValue::Set(param.date),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subscription::from_entity(entity))
    }

    /// Updates the fields present in `param`, leaving the rest and `deleted` untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Subscription))` - The subscription after the update
    /// - `Ok(None)` - No subscription with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateSubscriptionParam,
    ) -> Result<Option<Subscription>, DbErr> {
        let model = entity::subscription::ActiveModel {
            class_id: set_if(param.class_id),
            member_id: set_if(param.member_id),
            date: set_if(param.date),
            ..Default::default()
        };

        SoftDeleteRepository::<Subscription>::new(self.db)
            .update_fields(id, model)
            .await
    }
}

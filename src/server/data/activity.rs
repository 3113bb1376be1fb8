use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        set_if,
        soft_delete::{Record, SoftDeleteRepository},
    },
    model::activity::{Activity, CreateActivityParam, UpdateActivityParam},
};

/// Repository providing inserts and partial updates for activities.
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new activity with `deleted` set to false.
    pub async fn create(&self, param: CreateActivityParam) -> Result<Activity, DbErr> {
        let entity = entity::activity::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            is_active: ActiveValue::Set(param.is_active),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity))
    }

    /// Updates the fields present in `param`; `Ok(None)` when the id does not exist.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateActivityParam,
    ) -> Result<Option<Activity>, DbErr> {
        let model = entity::activity::ActiveModel {
            name: set_if(param.name),
            description: set_if(param.description.map(Some)),
            is_active: set_if(param.is_active),
            ..Default::default()
        };

        SoftDeleteRepository::<Activity>::new(self.db)
            .update_fields(id, model)
            .await
    }
}

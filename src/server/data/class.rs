use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        set_if,
        soft_delete::{Record, SoftDeleteRepository},
    },
    model::class::{Class, CreateClassParam, UpdateClassParam},
};

/// Repository providing inserts and partial updates for classes.
///
/// Trainer and activity ids are stored as given; nothing checks that they exist.
pub struct ClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateClassParam) -> Result<Class, DbErr> {
        let entity = entity::class::ActiveModel {
            day: ActiveValue::Set(param.day),
            hour: ActiveValue::Set(param.hour),
            trainer_id: ActiveValue::Set(param.trainer_id),
            activity_id: ActiveValue::Set(param.activity_id),
            slots: ActiveValue::Set(param.slots),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Class::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: UpdateClassParam) -> Result<Option<Class>, DbErr> {
        let model = entity::class::ActiveModel {
            day: set_if(param.day),
            hour: set_if(param.hour),
            trainer_id: set_if(param.trainer_id),
            activity_id: set_if(param.activity_id),
            slots: set_if(param.slots),
            ..Default::default()
        };

        SoftDeleteRepository::<Class>::new(self.db)
            .update_fields(id, model)
            .await
    }
}

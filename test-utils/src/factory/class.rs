//! Class factory for creating test class entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
///
/// Trainer and activity ids are plain references, so a class can be created
/// without inserting either.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    day: String,
    hour: String,
    trainer_id: i32,
    activity_id: i32,
    slots: i32,
    deleted: bool,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory for Monday 18:30 with trainer 1, activity 1 and 20 slots.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            day: "Monday".to_string(),
            hour: "18:30".to_string(),
            trainer_id: 1,
            activity_id: 1,
            slots: 20,
            deleted: false,
        }
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }

    pub fn hour(mut self, hour: impl Into<String>) -> Self {
        self.hour = hour.into();
        self
    }

    pub fn trainer_id(mut self, trainer_id: i32) -> Self {
        self.trainer_id = trainer_id;
        self
    }

    pub fn activity_id(mut self, activity_id: i32) -> Self {
        self.activity_id = activity_id;
        self
    }

    pub fn slots(mut self, slots: i32) -> Self {
        self.slots = slots;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            day: ActiveValue::Set(self.day),
            hour: ActiveValue::Set(self.hour),
            trainer_id: ActiveValue::Set(self.trainer_id),
            activity_id: ActiveValue::Set(self.activity_id),
            slots: ActiveValue::Set(self.slots),
            deleted: ActiveValue::Set(self.deleted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active class with default values.
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db).build().await
}

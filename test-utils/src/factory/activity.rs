//! Activity factory for creating test activity entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test activities with customizable fields.
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    is_active: bool,
    deleted: bool,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory named `"Crossfit"` with a default description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: "Crossfit".to_string(),
            description: Some(format!("High intensity session number {}", id)),
            is_active: true,
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            is_active: ActiveValue::Set(self.is_active),
            deleted: ActiveValue::Set(self.deleted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active activity with default values.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}

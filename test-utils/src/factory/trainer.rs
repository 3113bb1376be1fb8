//! Trainer factory for creating test trainer entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, unique_dni, PASSWORD_HASH};

/// Factory for creating test trainers with customizable fields.
pub struct TrainerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    dni: String,
    email: String,
    salary: Option<String>,
    is_active: bool,
    deleted: bool,
}

impl<'a> TrainerFactory<'a> {
    /// Creates a new TrainerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Dwight"`, last_name: `"Schrute"`
    /// - salary: `"$85000.43"`
    /// - is_active: `true`, deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Dwight".to_string(),
            last_name: "Schrute".to_string(),
            dni: unique_dni(id),
            email: format!("trainer{}@gym.com", id),
            salary: Some("$85000.43".to_string()),
            is_active: true,
            deleted: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn salary(mut self, salary: Option<String>) -> Self {
        self.salary = salary;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the trainer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trainer::Model)` - Created trainer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trainer::Model, DbErr> {
        entity::trainer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            dni: ActiveValue::Set(self.dni),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(PASSWORD_HASH.to_string()),
            city: ActiveValue::Set(None),
            salary: ActiveValue::Set(self.salary),
            is_active: ActiveValue::Set(self.is_active),
            deleted: ActiveValue::Set(self.deleted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active trainer with default values.
pub async fn create_trainer(db: &DatabaseConnection) -> Result<entity::trainer::Model, DbErr> {
    TrainerFactory::new(db).build().await
}

/// Creates a soft-deleted trainer with default values.
pub async fn create_deleted_trainer(
    db: &DatabaseConnection,
) -> Result<entity::trainer::Model, DbErr> {
    TrainerFactory::new(db).deleted(true).build().await
}

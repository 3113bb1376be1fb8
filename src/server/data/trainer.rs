use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        set_if,
        soft_delete::{Record, SoftDeleteRepository},
    },
    model::trainer::{CreateTrainerParam, Trainer, UpdateTrainerParam},
};

/// Repository providing inserts and partial updates for trainers.
pub struct TrainerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new trainer with `deleted` set to false.
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The stored trainer with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTrainerParam) -> Result<Trainer, DbErr> {
        let person = param.person;
        let entity = entity::trainer::ActiveModel {
            first_name: ActiveValue::Set(person.first_name),
            last_name: ActiveValue::Set(person.last_name),
            dni: ActiveValue::Set(person.dni),
            phone: ActiveValue::Set(person.phone),
            email: ActiveValue::Set(person.email),
            password: ActiveValue::Set(person.password_hash),
            city: ActiveValue::Set(person.city),
            salary: ActiveValue::Set(param.salary),
            is_active: ActiveValue::Set(param.is_active),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trainer::from_entity(entity))
    }

    /// Updates the fields present in `param`, leaving the rest and `deleted` untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Trainer))` - The trainer after the update
    /// - `Ok(None)` - No trainer with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateTrainerParam,
    ) -> Result<Option<Trainer>, DbErr> {
        let person = param.person;
        let model = entity::trainer::ActiveModel {
            first_name: set_if(person.first_name),
            last_name: set_if(person.last_name),
            dni: set_if(person.dni),
            phone: set_if(person.phone.map(Some)),
            email: set_if(person.email),
            password: set_if(person.password_hash),
            city: set_if(person.city.map(Some)),
            salary: set_if(param.salary.map(Some)),
            is_active: set_if(param.is_active),
            ..Default::default()
        };

        SoftDeleteRepository::<Trainer>::new(self.db)
            .update_fields(id, model)
            .await
    }
}

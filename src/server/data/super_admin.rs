use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        set_if,
        soft_delete::{Record, SoftDeleteRepository},
    },
    model::{
        person::{CreatePersonParam, UpdatePersonParam},
        super_admin::SuperAdmin,
    },
};

/// Repository providing inserts and partial updates for super admins.
pub struct SuperAdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuperAdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new super admin with `deleted` set to false.
    ///
    /// # Arguments
    /// - `param` - Person fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(SuperAdmin)` - The stored super admin with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePersonParam) -> Result<SuperAdmin, DbErr> {
        let entity = entity::super_admin::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            dni: ActiveValue::Set(param.dni),
            phone: ActiveValue::Set(param.phone),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            city: ActiveValue::Set(param.city),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SuperAdmin::from_entity(entity))
    }

    /// Updates the fields present in `param`, leaving the rest and `deleted` untouched.
    ///
    /// # Returns
    /// - `Ok(Some(SuperAdmin))` - The super admin after the update
    /// - `Ok(None)` - No super admin with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePersonParam,
    ) -> Result<Option<SuperAdmin>, DbErr> {
        let model = entity::super_admin::ActiveModel {
            first_name: set_if(param.first_name),
            last_name: set_if(param.last_name),
            dni: set_if(param.dni),
            phone: set_if(param.phone.map(Some)),
            email: set_if(param.email),
            password: set_if(param.password_hash),
            city: set_if(param.city.map(Some)),
            ..Default::default()
        };

        SoftDeleteRepository::<SuperAdmin>::new(self.db)
            .update_fields(id, model)
            .await
    }
}

//! Admin factory for creating test admin entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, unique_dni, PASSWORD_HASH};

/// Factory for creating test admins with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::admin::AdminFactory;
///
/// let admin = AdminFactory::new(&db)
///     .first_name("Dwight")
///     .deleted(true)
///     .build()
///     .await?;
/// ```
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    dni: String,
    phone: Option<String>,
    email: String,
    city: Option<String>,
    deleted: bool,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Michael"`, last_name: `"Scott"`
    /// - dni: unique 8-digit number
    /// - email: `"admin{id}@gym.com"`
    /// - phone, city: `None`
    /// - deleted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AdminFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Michael".to_string(),
            last_name: "Scott".to_string(),
            dni: unique_dni(id),
            phone: None,
            email: format!("admin{}@gym.com", id),
            city: None,
            deleted: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn dni(mut self, dni: impl Into<String>) -> Self {
        self.dni = dni.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets whether the admin starts soft-deleted.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the admin entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin::Model)` - Created admin entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            dni: ActiveValue::Set(self.dni),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(PASSWORD_HASH.to_string()),
            city: ActiveValue::Set(self.city),
            deleted: ActiveValue::Set(self.deleted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active admin with default values.
///
/// Shorthand for `AdminFactory::new(db).build().await`.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}

/// Creates a soft-deleted admin with default values.
pub async fn create_deleted_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).deleted(true).build().await
}

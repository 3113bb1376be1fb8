//! Super admin factory for creating test super admin entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, unique_dni, PASSWORD_HASH};

/// Factory for creating test super admins with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::admin::SuperAdminFactory;
///
/// let super_admin = SuperAdminFactory::new(&db)
///     .first_name("Dwight")
///     .deleted(true)
///     .build()
///     .await?;
/// ```
pub struct SuperAdminFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    dni: String,
    phone: Option<String>,
    email: String,
    city: Option<String>,
    deleted: bool,
}

impl<'a> SuperAdminFactory<'a> {
    /// Creates a new SuperAdminFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Jan"`, last_name: `"Levinson"`
    /// - dni: unique 8-digit number
    /// - email: `"superadmin{id}@gym.com"`
    /// - phone, city: `None`
    /// - deleted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SuperAdminFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Jan".to_string(),
            last_name: "Levinson".to_string(),
            dni: unique_dni(id),
            phone: None,
            email: format!("superadmin{}@gym.com", id),
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

    /// Sets whether the super admin starts soft-deleted.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the super admin entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::super_admin::Model)` - Created super admin entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::super_admin::Model, DbErr> {
        entity::super_admin::ActiveModel {
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

/// Creates an active super admin with default values.
///
/// Shorthand for `SuperAdminFactory::new(db).build().await`.
pub async fn create_super_admin(
    db: &DatabaseConnection,
) -> Result<entity::super_admin::Model, DbErr> {
    SuperAdminFactory::new(db).build().await
}

/// Creates a soft-deleted super admin with default values.
pub async fn create_deleted_super_admin(
    db: &DatabaseConnection,
) -> Result<entity::super_admin::Model, DbErr> {
    SuperAdminFactory::new(db).deleted(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_super_admin_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(SuperAdmin).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let super_admin = create_super_admin(db).await?;

        assert!(super_admin.id > 0);
        assert_eq!(super_admin.dni.len(), 8);
        assert!(!super_admin.deleted);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_super_admins() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(SuperAdmin).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let super_admin1 = create_super_admin(db).await?;
        let super_admin2 = create_deleted_super_admin(db).await?;

        assert_ne!(super_admin1.id, super_admin2.id);
        assert_ne!(super_admin1.dni, super_admin2.dni);
        assert_ne!(super_admin1.email, super_admin2.email);
        assert!(super_admin2.deleted);

        Ok(())
    }
}

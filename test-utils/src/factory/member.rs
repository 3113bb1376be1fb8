//! Member factory for creating test member entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, unique_dni, PASSWORD_HASH};

/// Factory for creating test members with customizable fields.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    dni: String,
    email: String,
    birth_day: Option<NaiveDate>,
    postal_code: Option<String>,
    membership: String,
    is_active: bool,
    deleted: bool,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Pam"`, last_name: `"Beesly"`
    /// - membership: `"Classic"`, no birth day or postal code
    /// - is_active: `true`, deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Pam".to_string(),
            last_name: "Beesly".to_string(),
            dni: unique_dni(id),
            email: format!("member{}@gym.com", id),
            birth_day: None,
            postal_code: None,
            membership: "Classic".to_string(),
            is_active: true,
            deleted: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn birth_day(mut self, birth_day: NaiveDate) -> Self {
        self.birth_day = Some(birth_day);
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn membership(mut self, membership: impl Into<String>) -> Self {
        self.membership = membership.into();
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            dni: ActiveValue::Set(self.dni),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(PASSWORD_HASH.to_string()),
            city: ActiveValue::Set(None),
            birth_day: ActiveValue::Set(self.birth_day),
            postal_code: ActiveValue::Set(self.postal_code),
            membership: ActiveValue::Set(self.membership),
            is_active: ActiveValue::Set(self.is_active),
            deleted: ActiveValue::Set(self.deleted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a soft-deleted member with default values.
pub async fn create_deleted_member(
    db: &DatabaseConnection,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).deleted(true).build().await
}

//! Person fields shared by admins, super admins, trainers and members.
//!
//! The four person tables carry the same identity and contact columns. `Person`
//! holds them once so each variant only adds its own fields. Parameter types
//! carry the password already hashed; plain passwords never leave the service
//! layer.

use crate::{
    model::person::{CreatePersonDto, PersonDto, UpdatePersonDto},
    server::{error::AppError, util::password::hash_password},
};

/// Person fields of a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: Option<String>,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub city: Option<String>,
    pub deleted: bool,
}

impl Person {
    /// Converts the person fields to their DTO, dropping the password hash.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            phone: self.phone,
            email: self.email,
            city: self.city,
            deleted: self.deleted,
        }
    }
}

/// Builds a [`Person`] by moving the shared columns out of a person entity model.
///
/// The remaining variant-specific fields of the model stay available to the caller.
macro_rules! person_from_entity {
    ($model:ident) => {
        $crate::server::model::person::Person {
            id: $model.id,
            first_name: $model.first_name,
            last_name: $model.last_name,
            dni: $model.dni,
            phone: $model.phone,
            email: $model.email,
            password_hash: $model.password,
            city: $model.city,
            deleted: $model.deleted,
        }
    };
}

pub(crate) use person_from_entity;

/// Person fields for inserting a new record.
#[derive(Debug, Clone)]
pub struct CreatePersonParam {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub city: Option<String>,
}

impl CreatePersonParam {
    /// Converts a validated create DTO, hashing its password.
    ///
    /// # Returns
    /// - `Ok(CreatePersonParam)` - Fields ready to insert
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub fn from_dto(dto: CreatePersonDto) -> Result<Self, AppError> {
        Ok(Self {
            password_hash: hash_password(&dto.password)?,
            first_name: dto.first_name,
            last_name: dto.last_name,
            dni: dto.dni,
            phone: dto.phone,
            email: dto.email,
            city: dto.city,
        })
    }
}

/// Person fields for a partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub city: Option<String>,
}

impl UpdatePersonParam {
    /// Converts a validated update DTO, hashing the password when one is sent.
    ///
    /// # Returns
    /// - `Ok(UpdatePersonParam)` - Fields to change
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub fn from_dto(dto: UpdatePersonDto) -> Result<Self, AppError> {
        let password_hash = dto.password.as_deref().map(hash_password).transpose()?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            dni: dto.dni,
            phone: dto.phone,
            email: dto.email,
            password_hash,
            city: dto.city,
        })
    }
}

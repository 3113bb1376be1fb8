//! Member domain model and parameters.

use chrono::NaiveDate;

use crate::{
    model::member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    server::{
        data::soft_delete::Record,
        error::AppError,
        model::person::{person_from_entity, CreatePersonParam, Person, UpdatePersonParam},
    },
};

/// Membership assigned when a create request does not name one.
pub const DEFAULT_MEMBERSHIP: &str = "Classic";

/// Gym member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub person: Person,
    pub birth_day: Option<NaiveDate>,
    pub postal_code: Option<String>,
    /// One of `Classic`, `Only Classes` or `Black`.
    pub membership: String,
    pub is_active: bool,
}

impl Record for Member {
    type Entity = entity::member::Entity;

    fn from_entity(model: entity::member::Model) -> Self {
        Self {
            birth_day: model.birth_day,
            postal_code: model.postal_code,
            membership: model.membership,
            is_active: model.is_active,
            person: person_from_entity!(model),
        }
    }

    fn is_deleted(&self) -> bool {
        self.person.deleted
    }
}

impl Member {
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            person: self.person.into_dto(),
            birth_day: self.birth_day,
            postal_code: self.postal_code,
            membership: self.membership,
            is_active: self.is_active,
        }
    }
}

/// Parameters for inserting a member.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub person: CreatePersonParam,
    pub birth_day: Option<NaiveDate>,
    pub postal_code: Option<String>,
    pub membership: String,
    pub is_active: bool,
}

impl CreateMemberParam {
    pub fn from_dto(dto: CreateMemberDto) -> Result<Self, AppError> {
        Ok(Self {
            person: CreatePersonParam::from_dto(dto.person)?,
            birth_day: dto.birth_day,
            postal_code: dto.postal_code,
            membership: dto
                .membership
                .unwrap_or_else(|| DEFAULT_MEMBERSHIP.to_string()),
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

/// Parameters for a partial member update.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParam {
    pub person: UpdatePersonParam,
    pub birth_day: Option<NaiveDate>,
    pub postal_code: Option<String>,
    pub membership: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateMemberParam {
    pub fn from_dto(dto: UpdateMemberDto) -> Result<Self, AppError> {
        Ok(Self {
            person: UpdatePersonParam::from_dto(dto.person)?,
            birth_day: dto.birth_day,
            postal_code: dto.postal_code,
            membership: dto.membership,
            is_active: dto.is_active,
        })
    }
}

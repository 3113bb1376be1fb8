//! Trainer domain model and parameters.

use crate::{
    model::trainer::{CreateTrainerDto, TrainerDto, UpdateTrainerDto},
    server::{
        data::soft_delete::Record,
        error::AppError,
        model::person::{person_from_entity, CreatePersonParam, Person, UpdatePersonParam},
    },
};

/// Trainer with an optional salary string such as `"$85000.43"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trainer {
    pub person: Person,
    pub salary: Option<String>,
    pub is_active: bool,
}

impl Record for Trainer {
    type Entity = entity::trainer::Entity;

    fn from_entity(model: entity::trainer::Model) -> Self {
        Self {
            salary: model.salary,
            is_active: model.is_active,
            person: person_from_entity!(model),
        }
    }

    fn is_deleted(&self) -> bool {
        self.person.deleted
    }
}

impl Trainer {
    pub fn into_dto(self) -> TrainerDto {
        TrainerDto {
            person: self.person.into_dto(),
            salary: self.salary,
            is_active: self.is_active,
        }
    }
}

/// Parameters for inserting a trainer.
#[derive(Debug, Clone)]
pub struct CreateTrainerParam {
    pub person: CreatePersonParam,
    pub salary: Option<String>,
    /// Defaults to `true` when absent from the request.
    pub is_active: bool,
}

impl CreateTrainerParam {
    pub fn from_dto(dto: CreateTrainerDto) -> Result<Self, AppError> {
        Ok(Self {
            person: CreatePersonParam::from_dto(dto.person)?,
            salary: dto.salary,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

/// Parameters for a partial trainer update.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrainerParam {
    pub person: UpdatePersonParam,
    pub salary: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateTrainerParam {
    pub fn from_dto(dto: UpdateTrainerDto) -> Result<Self, AppError> {
        Ok(Self {
            person: UpdatePersonParam::from_dto(dto.person)?,
            salary: dto.salary,
            is_active: dto.is_active,
        })
    }
}

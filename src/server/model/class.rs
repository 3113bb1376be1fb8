//! Class domain model and parameters.
//!
//! A class is a weekly slot: a weekday and hour at which a trainer leads an
//! activity for a limited number of members. Trainer and activity are referenced
//! by id only.

use crate::{
    model::class::{ClassDto, CreateClassDto, UpdateClassDto},
    server::data::soft_delete::Record,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: i32,
    /// Weekday name, `Monday` through `Sunday`.
    pub day: String,
    /// 24-hour `HH:MM`.
    pub hour: String,
    pub trainer_id: i32,
    pub activity_id: i32,
    pub slots: i32,
    pub deleted: bool,
}

impl Record for Class {
    type Entity = entity::class::Entity;

    fn from_entity(model: entity::class::Model) -> Self {
        Self {
            id: model.id,
            day: model.day,
            hour: model.hour,
            trainer_id: model.trainer_id,
            activity_id: model.activity_id,
            slots: model.slots,
            deleted: model.deleted,
        }
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Class {
    /// Returns `"{day} {hour}"`, used in lookup messages.
    pub fn schedule(&self) -> String {
        format!("{} {}", self.day, self.hour)
    }

    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            day: self.day,
            hour: self.hour,
            trainer: self.trainer_id,
            activity: self.activity_id,
            slots: self.slots,
            deleted: self.deleted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClassParam {
    pub day: String,
    pub hour: String,
    pub trainer_id: i32,
    pub activity_id: i32,
    pub slots: i32,
}

impl From<CreateClassDto> for CreateClassParam {
    fn from(dto: CreateClassDto) -> Self {
        Self {
            day: dto.day,
            hour: dto.hour,
            trainer_id: dto.trainer,
            activity_id: dto.activity,
            slots: dto.slots,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClassParam {
    pub day: Option<String>,
    pub hour: Option<String>,
    pub trainer_id: Option<i32>,
    pub activity_id: Option<i32>,
    pub slots: Option<i32>,
}

impl From<UpdateClassDto> for UpdateClassParam {
    fn from(dto: UpdateClassDto) -> Self {
        Self {
            day: dto.day,
            hour: dto.hour,
            trainer_id: dto.trainer,
            activity_id: dto.activity,
            slots: dto.slots,
        }
    }
}

use crate::{
    model::activity::{ActivityDto, CreateActivityDto, UpdateActivityDto},
    server::data::soft_delete::Record,
};

/// Kind of training offered in classes, e.g. "Crossfit".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub deleted: bool,
}

impl Record for Activity {
    type Entity = entity::activity::Entity;

    fn from_entity(model: entity::activity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            is_active: model.is_active,
            deleted: model.deleted,
        }
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Activity {
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            deleted: self.deleted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateActivityParam {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<CreateActivityDto> for CreateActivityParam {
    fn from(dto: CreateActivityDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateActivityParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateActivityDto> for UpdateActivityParam {
    fn from(dto: UpdateActivityDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}

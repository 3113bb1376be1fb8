use crate::{
    model::person::PersonDto,
    server::{
        data::soft_delete::Record,
        model::person::{person_from_entity, Person},
    },
};

/// Gym administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub person: Person,
}

impl Record for Admin {
    type Entity = entity::admin::Entity;

    fn from_entity(model: entity::admin::Model) -> Self {
        Self {
            person: person_from_entity!(model),
        }
    }

    fn is_deleted(&self) -> bool {
        self.person.deleted
    }
}

impl Admin {
    pub fn into_dto(self) -> PersonDto {
        self.person.into_dto()
    }
}

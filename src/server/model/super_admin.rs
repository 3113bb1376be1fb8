use crate::{
    model::person::PersonDto,
    server::{
        data::soft_delete::Record,
        model::person::{person_from_entity, Person},
    },
};

/// Administrator allowed to manage other admins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperAdmin {
    pub person: Person,
}

impl Record for SuperAdmin {
    type Entity = entity::super_admin::Entity;

    fn from_entity(model: entity::super_admin::Model) -> Self {
        Self {
            person: person_from_entity!(model),
        }
    }

    fn is_deleted(&self) -> bool {
        self.person.deleted
    }
}

impl SuperAdmin {
    pub fn into_dto(self) -> PersonDto {
        self.person.into_dto()
    }
}

use chrono::NaiveDate;

use crate::{
    model::subscription::{CreateSubscriptionDto, SubscriptionDto, UpdateSubscriptionDto},
    server::data::soft_delete::Record,
};

/// A member's booking of a class on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: i32,
    pub class_id: i32,
    pub member_id: i32,
    pub date: NaiveDate,
    pub deleted: bool,
}

impl Record for Subscription {
    type Entity = entity::subscription::Entity;

    fn from_entity(model: entity::subscription::Model) -> Self {
        Self {
            id: model.id,
            class_id: model.class_id,
            member_id: model.member_id,
            date: model.date,
            deleted: model.deleted,
        }
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Subscription {
    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.id,
            classes: self.class_id,
            member: self.member_id,
            date: self.date,
            deleted: self.deleted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSubscriptionParam {
    pub class_id: i32,
    pub member_id: i32,
    pub date: NaiveDate,
}

impl From<CreateSubscriptionDto> for CreateSubscriptionParam {
    fn from(dto: CreateSubscriptionDto) -> Self {
        Self {
            class_id: dto.classes,
            member_id: dto.member,
            date: dto.date,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSubscriptionParam {
    pub class_id: Option<i32>,
    pub member_id: Option<i32>,
    pub date: Option<NaiveDate>,
}

impl From<UpdateSubscriptionDto> for UpdateSubscriptionParam {
    fn from(dto: UpdateSubscriptionDto) -> Self {
        Self {
            class_id: dto.classes,
            member_id: dto.member,
            date: dto.date,
        }
    }
}

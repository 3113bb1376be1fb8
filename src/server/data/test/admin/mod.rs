use crate::{
    model::person::{CreatePersonDto, UpdatePersonDto},
    server::{
        data::admin::AdminRepository,
        model::person::{CreatePersonParam, UpdatePersonParam},
        util::password::verify_password,
    },
};
use entity::prelude::Admin as AdminEntity;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn create_param() -> CreatePersonParam {
    CreatePersonParam::from_dto(CreatePersonDto {
        first_name: "Michael".to_string(),
        last_name: "Scott".to_string(),
        dni: "31000000".to_string(),
        phone: Some("1155550000".to_string()),
        email: "michael@dundermifflin.com".to_string(),
        password: "3p8s8R3KdW".to_string(),
        city: Some("Scranton".to_string()),
    })
    .unwrap()
}

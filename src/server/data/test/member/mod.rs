use chrono::NaiveDate;

use crate::{
    model::{member::CreateMemberDto, person::CreatePersonDto},
    server::{
        data::member::MemberRepository,
        model::member::{CreateMemberParam, UpdateMemberParam, DEFAULT_MEMBERSHIP},
    },
};
use entity::prelude::Member as MemberEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn create_dto(membership: Option<&str>) -> CreateMemberDto {
    CreateMemberDto {
        person: CreatePersonDto {
            first_name: "Pam".to_string(),
            last_name: "Beesly".to_string(),
            dni: "35123456".to_string(),
            phone: None,
            email: "pam@dundermifflin.com".to_string(),
            password: "3p8s8R3KdW".to_string(),
            city: Some("Scranton".to_string()),
        },
        birth_day: NaiveDate::from_ymd_opt(1979, 3, 25),
        postal_code: Some("18503".to_string()),
        membership: membership.map(str::to_string),
        is_active: None,
    }
}

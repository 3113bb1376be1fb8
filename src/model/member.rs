use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::person::{CreatePersonDto, PersonDto, UpdatePersonDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    #[serde(flatten)]
    pub person: PersonDto,
    pub birth_day: Option<NaiveDate>,
    pub postal_code: Option<String>,
    pub membership: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberDto {
    #[serde(flatten)]
    pub person: CreatePersonDto,
    pub birth_day: Option<NaiveDate>,
    pub postal_code: Option<String>,
    pub membership: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberDto {
    #[serde(flatten)]
    pub person: UpdatePersonDto,
    pub birth_day: Option<NaiveDate>,
    pub postal_code: Option<String>,
    pub membership: Option<String>,
    pub is_active: Option<bool>,
}

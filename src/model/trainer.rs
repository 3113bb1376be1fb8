use serde::{Deserialize, Serialize};

use crate::model::person::{CreatePersonDto, PersonDto, UpdatePersonDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerDto {
    #[serde(flatten)]
    pub person: PersonDto,
    pub salary: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainerDto {
    #[serde(flatten)]
    pub person: CreatePersonDto,
    pub salary: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainerDto {
    #[serde(flatten)]
    pub person: UpdatePersonDto,
    pub salary: Option<String>,
    pub is_active: Option<bool>,
}

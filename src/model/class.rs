use serde::{Deserialize, Serialize};

/// Weekly class. `trainer` and `activity` are record ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub id: i32,
    pub day: String,
    pub hour: String,
    pub trainer: i32,
    pub activity: i32,
    pub slots: i32,
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    pub day: String,
    pub hour: String,
    pub trainer: i32,
    pub activity: i32,
    pub slots: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassDto {
    pub day: Option<String>,
    pub hour: Option<String>,
    pub trainer: Option<i32>,
    pub activity: Option<i32>,
    pub slots: Option<i32>,
}

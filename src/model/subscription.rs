use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A member's booking of a class on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub id: i32,
    pub classes: i32,
    pub member: i32,
    pub date: NaiveDate,
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionDto {
    pub classes: i32,
    pub member: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionDto {
    pub classes: Option<i32>,
    pub member: Option<i32>,
    pub date: Option<NaiveDate>,
}

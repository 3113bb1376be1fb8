//! Subscription factory for creating test subscription entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscriptions with customizable fields.
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: i32,
    member_id: i32,
    date: NaiveDate,
    deleted: bool,
}

impl<'a> SubscriptionFactory<'a> {
    /// Creates a new SubscriptionFactory for class 1 and member 1 on 2023-05-01.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            class_id: 1,
            member_id: 1,
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap_or_default(),
            deleted: false,
        }
    }

    pub fn class_id(mut self, class_id: i32) -> Self {
        self.class_id = class_id;
        self
    }

    pub fn member_id(mut self, member_id: i32) -> Self {
        self.member_id = member_id;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        entity::subscription::ActiveModel {
            class_id: ActiveValue::Set(self.class_id),
            member_id: ActiveValue::Set(self.member_id),
            date: ActiveValue::Set(self.date),
            deleted: ActiveValue::Set(self.deleted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active subscription with default values.
pub async fn create_subscription(
    db: &DatabaseConnection,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db).build().await
}

use chrono::NaiveDate;

use crate::server::{
    data::subscription::SubscriptionRepository,
    model::subscription::{CreateSubscriptionParam, UpdateSubscriptionParam},
};
use entity::prelude::Subscription as SubscriptionEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

use crate::{
    model::activity::CreateActivityDto,
    server::{
        data::activity::ActivityRepository,
        model::activity::{CreateActivityParam, UpdateActivityParam},
    },
};
use entity::prelude::Activity as ActivityEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

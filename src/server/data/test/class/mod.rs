use crate::server::{
    data::class::ClassRepository,
    model::class::{CreateClassParam, UpdateClassParam},
};
use entity::prelude::Class as ClassEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

use crate::server::{
    data::trainer::TrainerRepository,
    model::{
        person::{CreatePersonParam, UpdatePersonParam},
        trainer::{CreateTrainerParam, UpdateTrainerParam},
    },
};
use entity::prelude::Trainer as TrainerEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

use crate::server::{
    data::soft_delete::{SoftDeleteRepository, Transition},
    model::{admin::Admin, class::Class},
};
use entity::prelude::{Admin as AdminEntity, Class as ClassEntity};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_active;
mod find_by_id;
mod purge;
mod set_deleted;
mod update_fields;

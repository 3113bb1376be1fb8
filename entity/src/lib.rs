//! SeaORM entity definitions for the gym database.

pub mod prelude;

pub mod activity;
pub mod admin;
pub mod class;
pub mod member;
pub mod subscription;
pub mod super_admin;
pub mod trainer;

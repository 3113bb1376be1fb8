//! Database repository layer for the gym's records.
//!
//! `soft_delete` holds the lifecycle queries shared by every table (listing,
//! lookup, delete/recover flag toggling and purging). The per-resource modules
//! hold the field-specific inserts and partial updates. Repositories use SeaORM
//! entity models internally and return domain models so services never touch
//! the database representation.

pub mod activity;
pub mod admin;
pub mod class;
pub mod member;
pub mod soft_delete;
pub mod subscription;
pub mod super_admin;
pub mod trainer;

#[cfg(test)]
mod test;

use sea_orm::{ActiveValue, Value};

/// Maps an optional update field to an active value; `None` leaves the column untouched.
pub(crate) fn set_if<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

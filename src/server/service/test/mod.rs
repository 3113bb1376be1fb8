use crate::{
    model::person::{CreatePersonDto, UpdatePersonDto},
    server::{
        error::{lifecycle::LifecycleError, AppError},
        service::{
            admin::AdminResource,
            class::ClassResource,
            lifecycle::{LifecycleService, Lookup},
            resource::Resource,
            super_admin::SuperAdminResource,
        },
    },
};
use entity::prelude::{Admin as AdminEntity, Class as ClassEntity, SuperAdmin as SuperAdminEntity};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn dwight() -> CreatePersonDto {
    CreatePersonDto {
        first_name: "Dwight".to_string(),
        last_name: "Schrute".to_string(),
        dni: "38987654".to_string(),
        phone: Some("1155551234".to_string()),
        email: "dwight@schrutefarms.com".to_string(),
        password: "3p8s8R3KdW".to_string(),
        city: Some("Scranton".to_string()),
    }
}

/// Asserts that `result` failed with exactly `expected`.
fn assert_lifecycle_err<T: std::fmt::Debug>(
    result: Result<T, AppError>,
    expected: LifecycleError,
) {
    match result {
        Err(AppError::LifecycleErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

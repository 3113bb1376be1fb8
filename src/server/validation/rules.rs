//! Field rule tables for every request DTO.

use crate::{
    model::{
        activity::{CreateActivityDto, UpdateActivityDto},
        class::{CreateClassDto, UpdateClassDto},
        member::{CreateMemberDto, UpdateMemberDto},
        person::{CreatePersonDto, UpdatePersonDto},
        subscription::{CreateSubscriptionDto, UpdateSubscriptionDto},
        trainer::{CreateTrainerDto, UpdateTrainerDto},
    },
    server::validation::{FieldRule, Pattern, Validate},
};

const FIRST_NAME: FieldRule = FieldRule::text("firstName", 3, 20, Some(Pattern::Name)).required();
const LAST_NAME: FieldRule = FieldRule::text("lastName", 3, 20, Some(Pattern::Name)).required();
const DNI: FieldRule = FieldRule::text("dni", 8, 10, Some(Pattern::Digits)).required();
const PHONE: FieldRule = FieldRule::text("phone", 10, 12, Some(Pattern::Digits));
const EMAIL: FieldRule = FieldRule::text("email", 5, 254, Some(Pattern::Email)).required();
const PASSWORD: FieldRule = FieldRule::text("password", 8, 20, Some(Pattern::Password)).required();
const CITY: FieldRule = FieldRule::text("city", 1, 50, None);
const IS_ACTIVE: FieldRule = FieldRule::boolean("isActive");
const RECORD_ID_MAX: i64 = i32::MAX as i64;

const PERSON_RULES: &[FieldRule] = &[FIRST_NAME, LAST_NAME, DNI, PHONE, EMAIL, PASSWORD, CITY];

const TRAINER_RULES: &[FieldRule] = &[
    FIRST_NAME,
    LAST_NAME,
    DNI,
    PHONE,
    EMAIL,
    PASSWORD,
    CITY,
    FieldRule::text("salary", 2, 11, Some(Pattern::Salary)),
    IS_ACTIVE,
];

const MEMBER_RULES: &[FieldRule] = &[
    FIRST_NAME,
    LAST_NAME,
    DNI,
    PHONE,
    EMAIL,
    PASSWORD,
    CITY,
    FieldRule::text("birthDay", 10, 10, Some(Pattern::Date)),
    FieldRule::text("postalCode", 4, 5, Some(Pattern::Digits)),
    FieldRule::text("membership", 5, 12, Some(Pattern::Membership)),
    IS_ACTIVE,
];

const ACTIVITY_RULES: &[FieldRule] = &[
    FieldRule::text("name", 3, 30, Some(Pattern::Name)).required(),
    FieldRule::text("description", 5, 100, None),
    IS_ACTIVE,
];

const CLASS_RULES: &[FieldRule] = &[
    FieldRule::text("day", 6, 9, Some(Pattern::Weekday)).required(),
    FieldRule::text("hour", 5, 5, Some(Pattern::Hour)).required(),
    FieldRule::integer("trainer", 1, RECORD_ID_MAX).required(),
    FieldRule::integer("activity", 1, RECORD_ID_MAX).required(),
    FieldRule::integer("slots", 1, 50).required(),
];

const SUBSCRIPTION_RULES: &[FieldRule] = &[
    FieldRule::integer("classes", 1, RECORD_ID_MAX).required(),
    FieldRule::integer("member", 1, RECORD_ID_MAX).required(),
    FieldRule::text("date", 10, 10, Some(Pattern::Date)).required(),
];

/// Implements `Validate` for a create DTO and its partial update DTO sharing one table.
macro_rules! validate_with {
    ($rules:expr => $create:ty, $update:ty) => {
        impl Validate for $create {
            const RULES: &'static [FieldRule] = $rules;
        }

        impl Validate for $update {
            const RULES: &'static [FieldRule] = $rules;
            const PARTIAL: bool = true;
        }
    };
}

validate_with!(PERSON_RULES => CreatePersonDto, UpdatePersonDto);
validate_with!(TRAINER_RULES => CreateTrainerDto, UpdateTrainerDto);
validate_with!(MEMBER_RULES => CreateMemberDto, UpdateMemberDto);
validate_with!(ACTIVITY_RULES => CreateActivityDto, UpdateActivityDto);
validate_with!(CLASS_RULES => CreateClassDto, UpdateClassDto);
validate_with!(SUBSCRIPTION_RULES => CreateSubscriptionDto, UpdateSubscriptionDto);

//! Request and response DTOs exchanged over the HTTP API.
//!
//! Field names are serialized in camelCase to match the JSON payloads clients
//! send. Request DTOs are deserialized only after the raw body has passed the
//! rule tables in `server::validation::rules`.

pub mod activity;
pub mod api;
pub mod class;
pub mod member;
pub mod person;
pub mod subscription;
pub mod trainer;

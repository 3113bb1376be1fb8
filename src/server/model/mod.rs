//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! the gym's records and the parameters of create/update operations. Domain models are
//! converted from entity models at the repository boundary and transformed to DTOs at
//! the controller boundary. Parameter types are built from validated request DTOs and
//! carry passwords already hashed.

pub mod activity;
pub mod admin;
pub mod class;
pub mod member;
pub mod person;
pub mod subscription;
pub mod super_admin;
pub mod trainer;

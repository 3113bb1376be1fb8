//! Service layer for the gym's resources.
//!
//! `lifecycle` holds the generic service applying the soft-delete rules. Each
//! resource module implements [`resource::Resource`] to plug its DTOs, labels and
//! repository into that service. Services work with domain models; DTO
//! conversion happens at the controller boundary.

pub mod activity;
pub mod admin;
pub mod class;
pub mod lifecycle;
pub mod member;
pub mod resource;
pub mod subscription;
pub mod super_admin;
pub mod trainer;

#[cfg(test)]
mod test;

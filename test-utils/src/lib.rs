//! Gym API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the gym
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for every gym table.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting records with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::Admin;
//!
//! #[tokio::test]
//! async fn test_admin_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let admin = factory::create_admin(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

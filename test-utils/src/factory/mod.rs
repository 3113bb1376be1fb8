//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Rows are inserted directly, bypassing validation and
//! password hashing, so factories can also seed records that start soft-deleted.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let admin = factory::create_admin(&db).await?;
//!     let deleted = factory::create_deleted_admin(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let class = factory::class::ClassFactory::new(&db)
//!     .day("Friday")
//!     .slots(12)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod admin;
pub mod class;
pub mod helpers;
pub mod member;
pub mod subscription;
pub mod super_admin;
pub mod trainer;

// Re-export commonly used factory functions for concise usage
pub use activity::create_activity;
pub use admin::{create_admin, create_deleted_admin};
pub use class::create_class;
pub use member::{create_deleted_member, create_member};
pub use subscription::create_subscription;
pub use super_admin::{create_deleted_super_admin, create_super_admin};
pub use trainer::{create_deleted_trainer, create_trainer};

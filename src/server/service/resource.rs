//! Description of a lifecycle-managed resource.
//!
//! Every gym resource is served by the same lifecycle service, controllers and
//! routes. A `Resource` implementation supplies what differs between them: the
//! labels used in messages, the request and response DTOs, and how validated
//! DTOs are turned into stored records.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{data::soft_delete::Record, error::AppError, validation::Validate};

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Singular label used in messages, e.g. `"Admin"`.
    const NAME: &'static str;

    /// Plural label used in purge messages, e.g. `"admins"`.
    const COLLECTION: &'static str;

    type Record: Record;
    type CreateDto: Validate + DeserializeOwned + Send + 'static;
    type UpdateDto: Validate + DeserializeOwned + Send + 'static;
    type Dto: Serialize + Send + 'static;

    /// Short human-readable description used in the lookup message; a
    /// person's first name.
    fn summary(record: &Self::Record) -> String;

    fn into_dto(record: Self::Record) -> Self::Dto;

    /// Stores a new record built from a validated create payload.
    async fn insert(db: &DatabaseConnection, dto: Self::CreateDto)
        -> Result<Self::Record, AppError>;

    /// Applies a validated partial update.
    ///
    /// # Returns
    /// - `Ok(Some(record))` - Record after the update
    /// - `Ok(None)` - No record with that id
    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: Self::UpdateDto,
    ) -> Result<Option<Self::Record>, AppError>;
}

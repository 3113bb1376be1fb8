//! Soft-delete lifecycle service.
//!
//! Applies the lifecycle rules on top of the repositories for any [`Resource`]:
//!
//! - created records start active
//! - soft-delete moves an active record to deleted and is rejected if it already is
//! - recover moves a deleted record back to active and is rejected if it is not deleted
//! - purge physically removes every deleted record and is rejected if there are none
//! - updates never touch the `deleted` flag
//!
//! State changes are single conditional updates in the repository, so a losing
//! concurrent request observes the winner's result and gets the matching error.

use std::marker::PhantomData;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::soft_delete::{Record, SoftDeleteRepository, Transition},
    error::{lifecycle::LifecycleError, AppError},
    service::resource::Resource,
};

/// Result of looking a record up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Record exists and is active.
    Found(T),
    /// Record exists but is flagged deleted.
    Deleted,
}

/// Service providing lifecycle operations for one resource.
pub struct LifecycleService<'a, R> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> LifecycleService<'a, R> {
    /// Creates a new LifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LifecycleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    fn repository(&self) -> SoftDeleteRepository<'a, R::Record> {
        SoftDeleteRepository::new(self.db)
    }

    /// Creates a new active record from a validated payload.
    ///
    /// # Returns
    /// - `Ok(record)` - The stored record
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, dto: R::CreateDto) -> Result<R::Record, AppError> {
        let record = R::insert(self.db, dto).await?;

        tracing::info!("{} created: {}", R::NAME, R::summary(&record));

        Ok(record)
    }

    /// Gets every active record ordered by id.
    pub async fn list_active(&self) -> Result<Vec<R::Record>, AppError> {
        Ok(self.repository().find_active().await?)
    }

    /// Looks a record up by id.
    ///
    /// A deleted record is not an error; it is reported as [`Lookup::Deleted`].
    ///
    /// # Returns
    /// - `Ok(Lookup::Found(record))` - Active record
    /// - `Ok(Lookup::Deleted)` - Record exists but is deleted
    /// - `Err(LifecycleError::Missing)` - No record with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Lookup<R::Record>, AppError> {
        let record = self
            .repository()
            .find_by_id(id)
            .await?
            .ok_or(LifecycleError::Missing { resource: R::NAME })?;

        if record.is_deleted() {
            Ok(Lookup::Deleted)
        } else {
            Ok(Lookup::Found(record))
        }
    }

    /// Applies a partial update; `deleted` is never changed.
    ///
    /// # Returns
    /// - `Ok(record)` - Record after the update
    /// - `Err(LifecycleError::NotFound)` - No record with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, dto: R::UpdateDto) -> Result<R::Record, AppError> {
        R::update(self.db, id, dto)
            .await?
            .ok_or_else(|| not_found::<R>(id).into())
    }

    /// Flags an active record as deleted.
    ///
    /// # Returns
    /// - `Ok(())` - Record is now deleted
    /// - `Err(LifecycleError::AlreadyDeleted)` - Record was already deleted
    /// - `Err(LifecycleError::NotFound)` - No record with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<(), AppError> {
        match self.repository().set_deleted(id, true).await? {
            Transition::Applied => {
                tracing::info!("{} {} soft-deleted", R::NAME, id);
                Ok(())
            }
            Transition::Unchanged => Err(LifecycleError::AlreadyDeleted {
                resource: R::NAME,
                id,
            }
            .into()),
            Transition::Missing => Err(not_found::<R>(id).into()),
        }
    }

    /// Clears the deleted flag of a record and returns it.
    ///
    /// # Returns
    /// - `Ok(record)` - Record after recovery
    /// - `Err(LifecycleError::NeverDeleted)` - Record was not deleted
    /// - `Err(LifecycleError::NotFound)` - No record with that id, or it was purged
    ///   before it could be read back
    /// - `Err(AppError::DbErr)` - Database error during update or query
    pub async fn recover(&self, id: i32) -> Result<R::Record, AppError> {
        let repo = self.repository();

        match repo.set_deleted(id, false).await? {
            Transition::Applied => {
                tracing::info!("{} {} recovered", R::NAME, id);
            }
            Transition::Unchanged => {
                return Err(LifecycleError::NeverDeleted {
                    resource: R::NAME,
                    id,
                }
                .into())
            }
            Transition::Missing => return Err(not_found::<R>(id).into()),
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<R>(id).into())
    }

    /// Physically removes every deleted record.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of records removed, always at least one
    /// - `Err(LifecycleError::NothingToPurge)` - There were no deleted records
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn purge(&self) -> Result<u64, AppError> {
        let removed = self.repository().purge().await?;

        if removed == 0 {
            return Err(LifecycleError::NothingToPurge {
                collection: R::COLLECTION,
            }
            .into());
        }

        tracing::info!("Purged {} deleted {}", removed, R::COLLECTION);

        Ok(removed)
    }
}

fn not_found<R: Resource>(id: i32) -> LifecycleError {
    LifecycleError::NotFound {
        resource: R::NAME,
        id,
    }
}

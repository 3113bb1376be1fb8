//! Soft-delete lifecycle shared by every gym table.
//!
//! Every table carries an integer `id` primary key and a `deleted` flag. The
//! `SoftDelete` trait names those two columns for an entity so that
//! `SoftDeleteRepository` can run the lifecycle queries (listing, lookup,
//! flag toggling and purging) once for all resources. Field-specific inserts and
//! updates live in the per-resource repositories.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Entity with an `id` primary key and a `deleted` lifecycle flag.
pub trait SoftDelete: EntityTrait<Model: Sync> {
    fn id_column() -> Self::Column;
    fn deleted_column() -> Self::Column;
}

macro_rules! impl_soft_delete {
    ($($table:ident),+ $(,)?) => {
        $(
            impl SoftDelete for entity::$table::Entity {
                fn id_column() -> Self::Column {
                    entity::$table::Column::Id
                }

                fn deleted_column() -> Self::Column {
                    entity::$table::Column::Deleted
                }
            }
        )+
    };
}

impl_soft_delete!(admin, super_admin, trainer, member, activity, class, subscription);

/// Domain model stored in a soft-delete table.
///
/// Repositories convert entity models into the implementing type at the data
/// boundary so services never handle SeaORM models directly.
pub trait Record: Sized + Send + Sync + 'static {
    type Entity: SoftDelete;

    fn from_entity(model: <Self::Entity as EntityTrait>::Model) -> Self;

    fn is_deleted(&self) -> bool;
}

/// Outcome of a conditional `deleted` flag update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The flag was flipped.
    Applied,
    /// The record exists but the flag already had the requested value.
    Unchanged,
    /// No record has the id.
    Missing,
}

/// Repository providing the lifecycle queries for one soft-delete table.
pub struct SoftDeleteRepository<'a, R> {
    db: &'a DatabaseConnection,
    _record: PhantomData<fn() -> R>,
}

impl<'a, R: Record> SoftDeleteRepository<'a, R> {
    /// Creates a new SoftDeleteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SoftDeleteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }

    /// Gets every record that is not flagged deleted, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<R>)` - Active records (empty if there are none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(&self) -> Result<Vec<R>, DbErr> {
        let entities = R::Entity::find()
            .filter(R::Entity::deleted_column().eq(false))
            .order_by_asc(R::Entity::id_column())
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(R::from_entity).collect())
    }

    /// Gets a record by id regardless of its `deleted` flag.
    ///
    /// # Arguments
    /// - `id` - Record id
    ///
    /// # Returns
    /// - `Ok(Some(R))` - Record found
    /// - `Ok(None)` - No record with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<R>, DbErr> {
        let entity = R::Entity::find()
            .filter(R::Entity::id_column().eq(id))
            .one(self.db)
            .await?;

        Ok(entity.map(R::from_entity))
    }

    /// Sets the `deleted` flag of a record if it currently holds the opposite value.
    ///
    /// The flip is a single `UPDATE ... WHERE id = ? AND deleted = ?`, so two
    /// concurrent requests cannot both apply it. When no row is affected, a
    /// follow-up count tells a missing record apart from one already in the
    /// requested state.
    ///
    /// # Arguments
    /// - `id` - Record id
    /// - `deleted` - Requested value of the flag
    ///
    /// # Returns
    /// - `Ok(Transition::Applied)` - Flag flipped
    /// - `Ok(Transition::Unchanged)` - Flag already had the requested value
    /// - `Ok(Transition::Missing)` - No record with that id
    /// - `Err(DbErr)` - Database error during update or count
    pub async fn set_deleted(&self, id: i32, deleted: bool) -> Result<Transition, DbErr> {
        let result = R::Entity::update_many()
            .col_expr(R::Entity::deleted_column(), Expr::value(deleted))
            .filter(R::Entity::id_column().eq(id))
            .filter(R::Entity::deleted_column().eq(!deleted))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(Transition::Applied);
        }

        let existing = R::Entity::find()
            .filter(R::Entity::id_column().eq(id))
            .count(self.db)
            .await?;

        if existing > 0 {
            Ok(Transition::Unchanged)
        } else {
            Ok(Transition::Missing)
        }
    }

    /// Applies a partial update to a record and returns the stored result.
    ///
    /// Only the columns set on `model` are written; the primary key must be left
    /// unset. When `model` sets nothing the record is returned unchanged.
    ///
    /// # Arguments
    /// - `id` - Record id
    /// - `model` - Active model carrying the columns to change
    ///
    /// # Returns
    /// - `Ok(Some(R))` - Record after the update
    /// - `Ok(None)` - No record with that id
    /// - `Err(DbErr)` - Database error during update or re-fetch
    pub async fn update_fields<A>(&self, id: i32, model: A) -> Result<Option<R>, DbErr>
    where
        A: ActiveModelTrait<Entity = R::Entity> + Send,
    {
        if !model.is_changed() {
            return self.find_by_id(id).await;
        }

        let result = R::Entity::update_many()
            .set(model)
            .filter(R::Entity::id_column().eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Physically removes every record flagged deleted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn purge(&self) -> Result<u64, DbErr> {
        let result = R::Entity::delete_many()
            .filter(R::Entity::deleted_column().eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

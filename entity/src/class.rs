use sea_orm::entity::prelude::*;

/// A weekly class slot. `trainer_id` and `activity_id` are plain references
/// without foreign keys so purging a trainer or activity never cascades.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub day: String,
    pub hour: String,
    pub trainer_id: i32,
    pub activity_id: i32,
    pub slots: i32,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

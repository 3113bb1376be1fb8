use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: Option<String>,
    pub email: String,
    pub password: String,
    pub city: Option<String>,
    pub birth_day: Option<Date>,
    pub postal_code: Option<String>,
    pub membership: String,
    pub is_active: bool,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        set_if,
        soft_delete::{Record, SoftDeleteRepository},
    },
    model::member::{CreateMemberParam, Member, UpdateMemberParam},
};

/// Repository providing inserts and partial updates for members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member with `deleted` set to false.
    ///
    /// # Returns
    /// - `Ok(Member)` - The stored member with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let person = param.person;
        let entity = entity::member::ActiveModel {
            first_name: ActiveValue::Set(person.first_name),
            last_name: ActiveValue::Set(person.last_name),
            dni: ActiveValue::Set(person.dni),
            phone: ActiveValue::Set(person.phone),
            email: ActiveValue::Set(person.email),
            password: ActiveValue::Set(person.password_hash),
            city: ActiveValue::Set(person.city),
            birth_day: ActiveValue::Set(param.birth_day),
            postal_code: ActiveValue::Set(param.postal_code),
            membership: ActiveValue::Set(param.membership),
            is_active: ActiveValue::Set(param.is_active),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Updates the fields present in `param`, leaving the rest and `deleted` untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The member after the update
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateMemberParam) -> Result<Option<Member>, DbErr> {
        let person = param.person;
        let model = entity::member::ActiveModel {
            first_name: set_if(person.first_name),
            last_name: set_if(person.last_name),
            dni: set_if(person.dni),
            phone: set_if(person.phone.map(Some)),
            email: set_if(person.email),
            password: set_if(person.password_hash),
            city: set_if(person.city.map(Some)),
            birth_day: set_if(param.birth_day.map(Some)),
            postal_code: set_if(param.postal_code.map(Some)),
            membership: set_if(param.membership),
            is_active: set_if(param.is_active),
            ..Default::default()
        };

        SoftDeleteRepository::<Member>::new(self.db)
            .update_fields(id, model)
            .await
    }
}

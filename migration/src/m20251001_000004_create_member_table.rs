use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::FirstName))
                    .col(string(Member::LastName))
                    .col(string(Member::Dni))
                    .col(string_null(Member::Phone))
                    .col(string(Member::Email))
                    .col(string(Member::Password))
                    .col(string_null(Member::City))
                    .col(date_null(Member::BirthDay))
                    .col(string_null(Member::PostalCode))
                    .col(string(Member::Membership).default("Classic"))
                    .col(boolean(Member::IsActive).default(true))
                    .col(boolean(Member::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    FirstName,
    LastName,
    Dni,
    Phone,
    Email,
    Password,
    City,
    BirthDay,
    PostalCode,
    Membership,
    IsActive,
    Deleted,
}

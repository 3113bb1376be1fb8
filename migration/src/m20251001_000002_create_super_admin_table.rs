use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SuperAdmin::Table)
                    .if_not_exists()
                    .col(pk_auto(SuperAdmin::Id))
                    .col(string(SuperAdmin::FirstName))
                    .col(string(SuperAdmin::LastName))
                    .col(string(SuperAdmin::Dni))
                    .col(string_null(SuperAdmin::Phone))
                    .col(string(SuperAdmin::Email))
                    .col(string(SuperAdmin::Password))
                    .col(string_null(SuperAdmin::City))
                    .col(boolean(SuperAdmin::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SuperAdmin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SuperAdmin {
    Table,
    Id,
    FirstName,
    LastName,
    Dni,
    Phone,
    Email,
    Password,
    City,
    Deleted,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(pk_auto(Admin::Id))
                    .col(string(Admin::FirstName))
                    .col(string(Admin::LastName))
                    .col(string(Admin::Dni))
                    .col(string_null(Admin::Phone))
                    .col(string(Admin::Email))
                    .col(string(Admin::Password))
                    .col(string_null(Admin::City))
                    .col(boolean(Admin::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Admin {
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

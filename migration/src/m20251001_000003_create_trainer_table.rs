use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainer::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainer::Id))
                    .col(string(Trainer::FirstName))
                    .col(string(Trainer::LastName))
                    .col(string(Trainer::Dni))
                    .col(string_null(Trainer::Phone))
                    .col(string(Trainer::Email))
                    .col(string(Trainer::Password))
                    .col(string_null(Trainer::City))
                    .col(string_null(Trainer::Salary))
                    .col(boolean(Trainer::IsActive).default(true))
                    .col(boolean(Trainer::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trainer {
    Table,
    Id,
    FirstName,
    LastName,
    Dni,
    Phone,
    Email,
    Password,
    City,
    Salary,
    IsActive,
    Deleted,
}

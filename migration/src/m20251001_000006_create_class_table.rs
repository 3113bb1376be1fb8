use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // trainer_id and activity_id intentionally carry no foreign key so a
        // purge of either table leaves classes untouched.
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(string(Class::Day))
                    .col(string(Class::Hour))
                    .col(integer(Class::TrainerId))
                    .col(integer(Class::ActivityId))
                    .col(integer(Class::Slots))
                    .col(boolean(Class::Deleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    Table,
    Id,
    Day,
    Hour,
    TrainerId,
    ActivityId,
    Slots,
    Deleted,
}

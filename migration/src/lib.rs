pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_admin_table;
mod m20251001_000002_create_super_admin_table;
mod m20251001_000003_create_trainer_table;
mod m20251001_000004_create_member_table;
mod m20251001_000005_create_activity_table;
mod m20251001_000006_create_class_table;
mod m20251001_000007_create_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_admin_table::Migration),
            Box::new(m20251001_000002_create_super_admin_table::Migration),
            Box::new(m20251001_000003_create_trainer_table::Migration),
            Box::new(m20251001_000004_create_member_table::Migration),
            Box::new(m20251001_000005_create_activity_table::Migration),
            Box::new(m20251001_000006_create_class_table::Migration),
            Box::new(m20251001_000007_create_subscription_table::Migration),
        ]
    }
}

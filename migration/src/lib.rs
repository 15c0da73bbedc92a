pub use sea_orm_migration::prelude::*;

mod m20260810_000001_room;
mod m20260810_000002_student_profile;
mod m20260810_000003_allocation;
mod m20260810_000004_charge;
mod m20260810_000005_payment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_room::Migration),
            Box::new(m20260810_000002_student_profile::Migration),
            Box::new(m20260810_000003_allocation::Migration),
            Box::new(m20260810_000004_charge::Migration),
            Box::new(m20260810_000005_payment::Migration),
        ]
    }
}

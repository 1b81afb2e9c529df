//! Migrator registering entity-specific migrations in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_location;
mod m20240601_000002_create_customer;
mod m20240601_000003_create_car;
mod m20240601_000004_create_booking;
mod m20240601_000005_create_reservation;
mod m20240601_000006_create_insurance;
mod m20240601_000007_create_maintenance;
mod m20240601_000008_create_payment;
mod m20240601_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_location::Migration),
            Box::new(m20240601_000002_create_customer::Migration),
            Box::new(m20240601_000003_create_car::Migration),
            Box::new(m20240601_000004_create_booking::Migration),
            Box::new(m20240601_000005_create_reservation::Migration),
            Box::new(m20240601_000006_create_insurance::Migration),
            Box::new(m20240601_000007_create_maintenance::Migration),
            Box::new(m20240601_000008_create_payment::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000009_add_indexes::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: &[(&str, Tables, Columns)] = &[
    ("idx_car_location", Tables::Car, Columns::LocationId),
    ("idx_booking_customer", Tables::Booking, Columns::CustomerId),
    ("idx_booking_car", Tables::Booking, Columns::CarId),
    ("idx_reservation_customer", Tables::Reservation, Columns::CustomerId),
    ("idx_reservation_car", Tables::Reservation, Columns::CarId),
    ("idx_insurance_car", Tables::Insurance, Columns::CarId),
    ("idx_maintenance_car", Tables::Maintenance, Columns::CarId),
    ("idx_payment_booking", Tables::Payment, Columns::BookingId),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // FK columns are not indexed by Postgres automatically
        for (name, table, col) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(*name)
                        .table(*table)
                        .col(*col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES {
            manager
                .drop_index(Index::drop().name(*name).table(*table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Tables { Car, Booking, Reservation, Insurance, Maintenance, Payment }

#[derive(DeriveIden, Clone, Copy)]
enum Columns { LocationId, CustomerId, CarId, BookingId }

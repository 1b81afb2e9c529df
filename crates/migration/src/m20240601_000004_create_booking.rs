//! Create `booking` table with FKs to `customer` and `car`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::BookingId))
                    .col(integer(Booking::CustomerId).not_null())
                    .col(integer(Booking::CarId).not_null())
                    .col(date(Booking::RentalStartDate).not_null())
                    .col(date(Booking::RentalEndDate).not_null())
                    .col(decimal_len(Booking::TotalAmount, 10, 2).not_null())
                    .col(timestamp_with_time_zone(Booking::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Booking::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(Customer::Table, Customer::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_car")
                            .from(Booking::Table, Booking::CarId)
                            .to(Car::Table, Car::CarId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, BookingId, CustomerId, CarId, RentalStartDate, RentalEndDate, TotalAmount, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Customer { Table, CustomerId }

#[derive(DeriveIden)]
enum Car { Table, CarId }

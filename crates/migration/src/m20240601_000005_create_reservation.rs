//! Create `reservation` table with FKs to `customer` and `car`.
//!
//! `return_date` stays open until the car is handed back.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::ReservationId))
                    .col(integer(Reservation::CustomerId).not_null())
                    .col(integer(Reservation::CarId).not_null())
                    .col(date(Reservation::ReservationDate).not_null())
                    .col(date(Reservation::PickupDate).not_null())
                    .col(date_null(Reservation::ReturnDate))
                    .col(timestamp_with_time_zone(Reservation::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Reservation::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer")
                            .from(Reservation::Table, Reservation::CustomerId)
                            .to(Customer::Table, Customer::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_car")
                            .from(Reservation::Table, Reservation::CarId)
                            .to(Car::Table, Car::CarId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reservation { Table, ReservationId, CustomerId, CarId, ReservationDate, PickupDate, ReturnDate, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Customer { Table, CustomerId }

#[derive(DeriveIden)]
enum Car { Table, CarId }

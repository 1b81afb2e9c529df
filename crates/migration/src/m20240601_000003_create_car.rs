//! Create `car` table with FK to `location`.
//!
//! A location that still owns cars cannot be deleted (RESTRICT).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::CarId))
                    .col(string_len(Car::CarModel, 128).not_null())
                    .col(date(Car::Year).not_null())
                    .col(string_len(Car::Color, 32).not_null())
                    .col(decimal_len(Car::RentalRate, 10, 2).not_null())
                    .col(boolean(Car::Availability).default(true).not_null())
                    .col(integer(Car::LocationId).not_null())
                    .col(timestamp_with_time_zone(Car::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Car::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_location")
                            .from(Car::Table, Car::LocationId)
                            .to(Location::Table, Location::LocationId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Car { Table, CarId, CarModel, Year, Color, RentalRate, Availability, LocationId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Location { Table, LocationId }

//! Create `maintenance` table with FK to `car`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Maintenance::Table)
                    .if_not_exists()
                    .col(pk_auto(Maintenance::MaintenanceId))
                    .col(integer(Maintenance::CarId).not_null())
                    .col(date(Maintenance::MaintenanceDate).not_null())
                    .col(string_len(Maintenance::Description, 512).not_null())
                    .col(decimal_len(Maintenance::Cost, 10, 2).not_null())
                    .col(timestamp_with_time_zone(Maintenance::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Maintenance::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_car")
                            .from(Maintenance::Table, Maintenance::CarId)
                            .to(Car::Table, Car::CarId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Maintenance::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Maintenance { Table, MaintenanceId, CarId, MaintenanceDate, Description, Cost, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Car { Table, CarId }

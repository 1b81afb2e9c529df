//! Create `insurance` table with FK to `car`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Insurance::Table)
                    .if_not_exists()
                    .col(pk_auto(Insurance::InsuranceId))
                    .col(integer(Insurance::CarId).not_null())
                    .col(string_len(Insurance::InsuranceProvider, 128).not_null())
                    .col(string_len(Insurance::PolicyNumber, 64).not_null())
                    .col(date(Insurance::StartDate).not_null())
                    .col(date_null(Insurance::EndDate))
                    .col(timestamp_with_time_zone(Insurance::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Insurance::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_car")
                            .from(Insurance::Table, Insurance::CarId)
                            .to(Car::Table, Car::CarId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Insurance::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Insurance { Table, InsuranceId, CarId, InsuranceProvider, PolicyNumber, StartDate, EndDate, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Car { Table, CarId }

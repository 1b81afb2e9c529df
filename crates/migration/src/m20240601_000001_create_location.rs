//! Create `location` table.
//!
//! Branches cars are assigned to.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::LocationId))
                    .col(string_len(Location::LocationName, 128).not_null())
                    .col(string_len(Location::Address, 255).not_null())
                    .col(string_len(Location::ContactNumber, 32).not_null())
                    .col(timestamp_with_time_zone(Location::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Location::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Location::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Location { Table, LocationId, LocationName, Address, ContactNumber, CreatedAt, UpdatedAt }

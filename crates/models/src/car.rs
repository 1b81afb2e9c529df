use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{booking, insurance, location, maintenance, reservation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "carID")]
    pub car_id: i32,
    pub car_model: String,
    pub year: Date,
    pub color: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub rental_rate: Decimal,
    pub availability: bool,
    #[serde(rename = "locationID")]
    pub location_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Location,
    Booking,
    Reservation,
    Insurance,
    Maintenance,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Location => Entity::belongs_to(location::Entity)
                .from(Column::LocationId)
                .to(location::Column::LocationId)
                .into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
            Relation::Reservation => Entity::has_many(reservation::Entity).into(),
            Relation::Insurance => Entity::has_many(insurance::Entity).into(),
            Relation::Maintenance => Entity::has_many(maintenance::Entity).into(),
        }
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef { Relation::Location.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl Related<reservation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reservation.def() }
}

impl Related<insurance::Entity> for Entity {
    fn to() -> RelationDef { Relation::Insurance.def() }
}

impl Related<maintenance::Entity> for Entity {
    fn to() -> RelationDef { Relation::Maintenance.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_rental_rate(rate: Decimal) -> Result<(), ModelError> {
    if rate < Decimal::ZERO { return Err(ModelError::Validation("rentalRate must be >= 0".into())); }
    Ok(())
}

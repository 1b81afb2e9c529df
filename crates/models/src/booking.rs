use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{car, customer, payment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "bookingID")]
    pub booking_id: i32,
    #[serde(rename = "customerID")]
    pub customer_id: i32,
    #[serde(rename = "carID")]
    pub car_id: i32,
    pub rental_start_date: Date,
    pub rental_end_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    Car,
    Payment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::CustomerId)
                .into(),
            Relation::Car => Entity::belongs_to(car::Entity)
                .from(Column::CarId)
                .to(car::Column::CarId)
                .into(),
            Relation::Payment => Entity::has_many(payment::Entity).into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef { Relation::Car.def() }
}

impl Related<payment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Payment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A rental must not end before it starts.
pub fn validate_rental_period(start: Date, end: Date) -> Result<(), ModelError> {
    if end < start {
        return Err(ModelError::Validation("rentalEndDate must not be before rentalStartDate".into()));
    }
    Ok(())
}

pub fn validate_total_amount(amount: Decimal) -> Result<(), ModelError> {
    if amount < Decimal::ZERO { return Err(ModelError::Validation("totalAmount must be >= 0".into())); }
    Ok(())
}

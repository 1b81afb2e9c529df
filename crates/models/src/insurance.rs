use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::car;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurance")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "insuranceID")]
    pub insurance_id: i32,
    #[serde(rename = "carID")]
    pub car_id: i32,
    pub insurance_provider: String,
    pub policy_number: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(car::Entity)
                .from(Column::CarId)
                .to(car::Column::CarId)
                .into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef { Relation::Car.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_coverage(start: Date, end: Option<Date>) -> Result<(), ModelError> {
    match end {
        Some(e) if e < start => Err(ModelError::Validation("endDate must not be before startDate".into())),
        _ => Ok(()),
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::car;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "maintenanceID")]
    pub maintenance_id: i32,
    #[serde(rename = "carID")]
    pub car_id: i32,
    pub maintenance_date: Date,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub cost: Decimal,
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

pub fn validate_cost(cost: Decimal) -> Result<(), ModelError> {
    if cost < Decimal::ZERO { return Err(ModelError::Validation("cost must be >= 0".into())); }
    Ok(())
}

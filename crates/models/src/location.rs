use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::car;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "locationID")]
    pub location_id: i32,
    pub location_name: String,
    pub address: String,
    pub contact_number: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Car => Entity::has_many(car::Entity).into() }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef { Relation::Car.def() }
}

impl ActiveModelBehavior for ActiveModel {}

use chrono::NaiveDate;
use models::maintenance;
use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceInput {
    #[serde(rename = "carID")]
    pub car_id: Option<i32>,
    pub maintenance_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
}

pub struct MaintenanceResource;

impl Resource for MaintenanceResource {
    type Entity = maintenance::Entity;
    type Model = maintenance::Model;
    type ActiveModel = maintenance::ActiveModel;
    type Input = MaintenanceInput;

    const LABEL: &'static str = "Maintenance";
    const KEY: &'static str = "maintenance";

    fn id_column() -> maintenance::Column { maintenance::Column::MaintenanceId }

    fn build(input: MaintenanceInput) -> Result<maintenance::ActiveModel, ServiceError> {
        let cost = required(input.cost, "cost")?;
        maintenance::validate_cost(cost)?;
        let ts = now();
        Ok(maintenance::ActiveModel {
            car_id: Set(required(input.car_id, "carID")?),
            maintenance_date: Set(required(input.maintenance_date, "maintenanceDate")?),
            description: Set(required(input.description, "description")?),
            cost: Set(cost),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(_current: &maintenance::Model, am: &mut maintenance::ActiveModel, input: MaintenanceInput) -> Result<usize, ServiceError> {
        if let Some(cost) = input.cost {
            maintenance::validate_cost(cost)?;
        }
        let mut n = 0;
        assign(&mut am.car_id, input.car_id, &mut n);
        assign(&mut am.maintenance_date, input.maintenance_date, &mut n);
        assign(&mut am.description, input.description, &mut n);
        assign(&mut am.cost, input.cost, &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::IntoActiveModel;

    fn full() -> MaintenanceInput {
        MaintenanceInput {
            car_id: Some(1),
            maintenance_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            description: Some("Oil change".into()),
            cost: Some(Decimal::new(8000, 2)),
        }
    }

    #[test]
    fn create_requires_fields_and_non_negative_cost() {
        let err = MaintenanceResource::build(MaintenanceInput { description: None, ..full() }).unwrap_err();
        assert_eq!(err.detail(), "description is required");

        let err = MaintenanceResource::build(MaintenanceInput { cost: Some(Decimal::new(-1, 2)), ..full() }).unwrap_err();
        assert!(err.is_validation());

        assert!(MaintenanceResource::build(MaintenanceInput { cost: Some(Decimal::ZERO), ..full() }).is_ok());
    }

    #[test]
    fn patch_rejects_negative_cost() {
        let current = maintenance::Model {
            maintenance_id: 1,
            car_id: 1,
            maintenance_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "Oil change".into(),
            cost: Decimal::new(8000, 2),
            created_at: now(),
            updated_at: now(),
        };
        let mut am = current.clone().into_active_model();
        let input = MaintenanceInput { cost: Some(Decimal::new(-500, 2)), ..Default::default() };
        assert!(MaintenanceResource::patch(&current, &mut am, input).is_err());

        let input = MaintenanceInput { description: Some("Brake pads".into()), ..Default::default() };
        assert_eq!(MaintenanceResource::patch(&current, &mut am, input).unwrap(), 1);
    }
}

use chrono::NaiveDate;
use models::insurance;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceInput {
    #[serde(rename = "carID")]
    pub car_id: Option<i32>,
    pub insurance_provider: Option<String>,
    pub policy_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub struct InsuranceResource;

impl Resource for InsuranceResource {
    type Entity = insurance::Entity;
    type Model = insurance::Model;
    type ActiveModel = insurance::ActiveModel;
    type Input = InsuranceInput;

    const LABEL: &'static str = "Insurance";
    const KEY: &'static str = "insurance";

    fn id_column() -> insurance::Column { insurance::Column::InsuranceId }

    fn build(input: InsuranceInput) -> Result<insurance::ActiveModel, ServiceError> {
        let start = required(input.start_date, "startDate")?;
        insurance::validate_coverage(start, input.end_date)?;
        let ts = now();
        Ok(insurance::ActiveModel {
            car_id: Set(required(input.car_id, "carID")?),
            insurance_provider: Set(required(input.insurance_provider, "insuranceProvider")?),
            policy_number: Set(required(input.policy_number, "policyNumber")?),
            start_date: Set(start),
            end_date: Set(input.end_date),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(current: &insurance::Model, am: &mut insurance::ActiveModel, input: InsuranceInput) -> Result<usize, ServiceError> {
        insurance::validate_coverage(input.start_date.unwrap_or(current.start_date), input.end_date.or(current.end_date))?;
        let mut n = 0;
        assign(&mut am.car_id, input.car_id, &mut n);
        assign(&mut am.insurance_provider, input.insurance_provider, &mut n);
        assign(&mut am.policy_number, input.policy_number, &mut n);
        assign(&mut am.start_date, input.start_date, &mut n);
        assign(&mut am.end_date, input.end_date.map(Some), &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

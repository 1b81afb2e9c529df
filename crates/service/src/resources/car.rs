use chrono::NaiveDate;
use models::car;
use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    pub car_model: Option<String>,
    pub year: Option<NaiveDate>,
    pub color: Option<String>,
    pub rental_rate: Option<Decimal>,
    pub availability: Option<bool>,
    #[serde(rename = "locationID")]
    pub location_id: Option<i32>,
}

pub struct CarResource;

impl Resource for CarResource {
    type Entity = car::Entity;
    type Model = car::Model;
    type ActiveModel = car::ActiveModel;
    type Input = CarInput;

    const LABEL: &'static str = "Car";
    const KEY: &'static str = "car";

    fn id_column() -> car::Column { car::Column::CarId }

    fn build(input: CarInput) -> Result<car::ActiveModel, ServiceError> {
        let rental_rate = required(input.rental_rate, "rentalRate")?;
        car::validate_rental_rate(rental_rate)?;
        let ts = now();
        Ok(car::ActiveModel {
            car_model: Set(required(input.car_model, "carModel")?),
            year: Set(required(input.year, "year")?),
            color: Set(required(input.color, "color")?),
            rental_rate: Set(rental_rate),
            availability: Set(input.availability.unwrap_or(true)),
            location_id: Set(required(input.location_id, "locationID")?),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(_current: &car::Model, am: &mut car::ActiveModel, input: CarInput) -> Result<usize, ServiceError> {
        if let Some(rate) = input.rental_rate {
            car::validate_rental_rate(rate)?;
        }
        let mut n = 0;
        assign(&mut am.car_model, input.car_model, &mut n);
        assign(&mut am.year, input.year, &mut n);
        assign(&mut am.color, input.color, &mut n);
        assign(&mut am.rental_rate, input.rental_rate, &mut n);
        assign(&mut am.availability, input.availability, &mut n);
        assign(&mut am.location_id, input.location_id, &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

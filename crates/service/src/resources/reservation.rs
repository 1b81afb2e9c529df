use chrono::NaiveDate;
use models::reservation;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInput {
    #[serde(rename = "customerID")]
    pub customer_id: Option<i32>,
    #[serde(rename = "carID")]
    pub car_id: Option<i32>,
    pub reservation_date: Option<NaiveDate>,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

pub struct ReservationResource;

impl Resource for ReservationResource {
    type Entity = reservation::Entity;
    type Model = reservation::Model;
    type ActiveModel = reservation::ActiveModel;
    type Input = ReservationInput;

    const LABEL: &'static str = "Reservation";
    const KEY: &'static str = "reservation";

    fn id_column() -> reservation::Column { reservation::Column::ReservationId }

    fn build(input: ReservationInput) -> Result<reservation::ActiveModel, ServiceError> {
        let pickup = required(input.pickup_date, "pickupDate")?;
        reservation::validate_return_date(pickup, input.return_date)?;
        let ts = now();
        Ok(reservation::ActiveModel {
            customer_id: Set(required(input.customer_id, "customerID")?),
            car_id: Set(required(input.car_id, "carID")?),
            reservation_date: Set(required(input.reservation_date, "reservationDate")?),
            pickup_date: Set(pickup),
            return_date: Set(input.return_date),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(current: &reservation::Model, am: &mut reservation::ActiveModel, input: ReservationInput) -> Result<usize, ServiceError> {
        reservation::validate_return_date(
            input.pickup_date.unwrap_or(current.pickup_date),
            input.return_date.or(current.return_date),
        )?;
        let mut n = 0;
        assign(&mut am.customer_id, input.customer_id, &mut n);
        assign(&mut am.car_id, input.car_id, &mut n);
        assign(&mut am.reservation_date, input.reservation_date, &mut n);
        assign(&mut am.pickup_date, input.pickup_date, &mut n);
        assign(&mut am.return_date, input.return_date.map(Some), &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

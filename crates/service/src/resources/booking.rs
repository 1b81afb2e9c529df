use chrono::NaiveDate;
use models::booking;
use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    #[serde(rename = "customerID")]
    pub customer_id: Option<i32>,
    #[serde(rename = "carID")]
    pub car_id: Option<i32>,
    pub rental_start_date: Option<NaiveDate>,
    pub rental_end_date: Option<NaiveDate>,
    pub total_amount: Option<Decimal>,
}

pub struct BookingResource;

impl Resource for BookingResource {
    type Entity = booking::Entity;
    type Model = booking::Model;
    type ActiveModel = booking::ActiveModel;
    type Input = BookingInput;

    const LABEL: &'static str = "Booking";
    const KEY: &'static str = "booking";

    fn id_column() -> booking::Column { booking::Column::BookingId }

    fn build(input: BookingInput) -> Result<booking::ActiveModel, ServiceError> {
        let start = required(input.rental_start_date, "rentalStartDate")?;
        let end = required(input.rental_end_date, "rentalEndDate")?;
        booking::validate_rental_period(start, end)?;
        let total = required(input.total_amount, "totalAmount")?;
        booking::validate_total_amount(total)?;
        let ts = now();
        Ok(booking::ActiveModel {
            customer_id: Set(required(input.customer_id, "customerID")?),
            car_id: Set(required(input.car_id, "carID")?),
            rental_start_date: Set(start),
            rental_end_date: Set(end),
            total_amount: Set(total),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(current: &booking::Model, am: &mut booking::ActiveModel, input: BookingInput) -> Result<usize, ServiceError> {
        booking::validate_rental_period(
            input.rental_start_date.unwrap_or(current.rental_start_date),
            input.rental_end_date.unwrap_or(current.rental_end_date),
        )?;
        if let Some(total) = input.total_amount {
            booking::validate_total_amount(total)?;
        }
        let mut n = 0;
        assign(&mut am.customer_id, input.customer_id, &mut n);
        assign(&mut am.car_id, input.car_id, &mut n);
        assign(&mut am.rental_start_date, input.rental_start_date, &mut n);
        assign(&mut am.rental_end_date, input.rental_end_date, &mut n);
        assign(&mut am.total_amount, input.total_amount, &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

use chrono::NaiveDate;
use models::payment;
use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    #[serde(rename = "bookingID")]
    pub booking_id: Option<i32>,
    pub payment_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub payment_method: Option<String>,
}

pub struct PaymentResource;

impl Resource for PaymentResource {
    type Entity = payment::Entity;
    type Model = payment::Model;
    type ActiveModel = payment::ActiveModel;
    type Input = PaymentInput;

    const LABEL: &'static str = "Payment";
    const KEY: &'static str = "payment";

    fn id_column() -> payment::Column { payment::Column::PaymentId }

    fn build(input: PaymentInput) -> Result<payment::ActiveModel, ServiceError> {
        let amount = required(input.amount, "amount")?;
        payment::validate_amount(amount)?;
        let ts = now();
        Ok(payment::ActiveModel {
            booking_id: Set(required(input.booking_id, "bookingID")?),
            payment_date: Set(required(input.payment_date, "paymentDate")?),
            amount: Set(amount),
            payment_method: Set(required(input.payment_method, "paymentMethod")?),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(_current: &payment::Model, am: &mut payment::ActiveModel, input: PaymentInput) -> Result<usize, ServiceError> {
        if let Some(amount) = input.amount {
            payment::validate_amount(amount)?;
        }
        let mut n = 0;
        assign(&mut am.booking_id, input.booking_id, &mut n);
        assign(&mut am.payment_date, input.payment_date, &mut n);
        assign(&mut am.amount, input.amount, &mut n);
        assign(&mut am.payment_method, input.payment_method, &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

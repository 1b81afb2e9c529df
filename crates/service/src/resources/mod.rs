//! [`Resource`](crate::crud::Resource) implementations, one per table.

pub mod booking;
pub mod car;
pub mod customer;
pub mod insurance;
pub mod location;
pub mod maintenance;
pub mod payment;
pub mod reservation;

pub use booking::BookingResource;
pub use car::CarResource;
pub use customer::CustomerResource;
pub use insurance::InsuranceResource;
pub use location::LocationResource;
pub use maintenance::MaintenanceResource;
pub use payment::PaymentResource;
pub use reservation::ReservationResource;

use chrono::Utc;
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveValue, Set, Value};

use crate::errors::ServiceError;

pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{} is required", field)))
}

pub(crate) fn now() -> DateTimeWithTimeZone { Utc::now().into() }

/// Set `slot` when a value was provided and count it.
pub(crate) fn assign<V: Into<Value>>(slot: &mut ActiveValue<V>, value: Option<V>, applied: &mut usize) {
    if let Some(v) = value {
        *slot = Set(v);
        *applied += 1;
    }
}

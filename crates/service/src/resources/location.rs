use models::location;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInput {
    pub location_name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
}

pub struct LocationResource;

impl Resource for LocationResource {
    type Entity = location::Entity;
    type Model = location::Model;
    type ActiveModel = location::ActiveModel;
    type Input = LocationInput;

    const LABEL: &'static str = "Location";
    const KEY: &'static str = "location";

    fn id_column() -> location::Column { location::Column::LocationId }

    fn build(input: LocationInput) -> Result<location::ActiveModel, ServiceError> {
        let ts = now();
        Ok(location::ActiveModel {
            location_name: Set(required(input.location_name, "locationName")?),
            address: Set(required(input.address, "address")?),
            contact_number: Set(required(input.contact_number, "contactNumber")?),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(_current: &location::Model, am: &mut location::ActiveModel, input: LocationInput) -> Result<usize, ServiceError> {
        let mut n = 0;
        assign(&mut am.location_name, input.location_name, &mut n);
        assign(&mut am.address, input.address, &mut n);
        assign(&mut am.contact_number, input.contact_number, &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

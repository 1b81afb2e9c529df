use models::customer;
use sea_orm::Set;
use serde::Deserialize;

use super::{assign, now, required};
use crate::auth::password::hash_password;
use crate::crud::Resource;
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

fn hashed(password: &str) -> Result<String, ServiceError> {
    customer::validate_password(password)?;
    hash_password(password).map_err(|e| ServiceError::Internal(e.to_string()))
}

pub struct CustomerResource;

impl Resource for CustomerResource {
    type Entity = customer::Entity;
    type Model = customer::Model;
    type ActiveModel = customer::ActiveModel;
    type Input = CustomerInput;

    const LABEL: &'static str = "Customer";
    const KEY: &'static str = "customer";

    fn id_column() -> customer::Column { customer::Column::CustomerId }

    fn build(input: CustomerInput) -> Result<customer::ActiveModel, ServiceError> {
        let name = required(input.name, "name")?;
        customer::validate_name(&name)?;
        let email = required(input.email, "email")?.trim().to_string();
        customer::validate_email(&email)?;
        let password_hash = hashed(&required(input.password, "password")?)?;
        let ts = now();
        Ok(customer::ActiveModel {
            name: Set(name),
            email: Set(email),
            phone: Set(input.phone),
            address: Set(input.address),
            password_hash: Set(password_hash),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        })
    }

    fn patch(_current: &customer::Model, am: &mut customer::ActiveModel, input: CustomerInput) -> Result<usize, ServiceError> {
        if let Some(name) = &input.name {
            customer::validate_name(name)?;
        }
        let email = input.email.map(|e| e.trim().to_string());
        if let Some(email) = &email {
            customer::validate_email(email)?;
        }
        let password_hash = input.password.as_deref().map(hashed).transpose()?;

        let mut n = 0;
        assign(&mut am.name, input.name, &mut n);
        assign(&mut am.email, email, &mut n);
        assign(&mut am.phone, input.phone.map(Some), &mut n);
        assign(&mut am.address, input.address.map(Some), &mut n);
        assign(&mut am.password_hash, password_hash, &mut n);
        if n > 0 {
            am.updated_at = Set(now());
        }
        Ok(n)
    }
}

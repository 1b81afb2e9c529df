use serde::{Deserialize, Serialize};

/// Login input; both fields are required but optional on the wire so
/// that absence is reported as a validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Customer view returned to clients after login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCustomer {
    #[serde(rename = "customerID")]
    pub customer_id: i32,
    pub name: String,
    pub email: String,
}

/// Stored credentials for a customer (hashed)
#[derive(Debug, Clone)]
pub struct Credentials {
    pub customer: AuthCustomer,
    pub password_hash: String,
}

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub cid: i32,
    pub exp: usize,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub customer: AuthCustomer,
    pub token: String,
}

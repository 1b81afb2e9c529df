use async_trait::async_trait;

use super::domain::Credentials;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::auth::domain::AuthCustomer;
    use crate::auth::password::hash_password;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        creds: Mutex<HashMap<String, Credentials>>, // key: email
    }

    impl MockAuthRepository {
        /// Register a customer with a plaintext password (hashed here).
        pub fn with_customer(self, customer_id: i32, name: &str, email: &str, password: &str) -> Result<Self, AuthError> {
            let c = Credentials {
                customer: AuthCustomer { customer_id, name: name.to_string(), email: email.to_string() },
                password_hash: hash_password(password)?,
            };
            self.creds
                .lock()
                .map_err(|e| AuthError::Repository(e.to_string()))?
                .insert(email.to_string(), c);
            Ok(self)
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError> {
            let creds = self.creds.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            Ok(creds.get(email).cloned())
        }
    }
}

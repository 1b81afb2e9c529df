use std::sync::Arc;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::auth::domain::{AuthCustomer, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError> {
        let res = models::customer::Entity::find()
            .filter(models::customer::Column::Email.eq(email.to_string()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|c| Credentials {
            customer: AuthCustomer { customer_id: c.customer_id, name: c.name, email: c.email },
            password_hash: c.password_hash,
        }))
    }
}

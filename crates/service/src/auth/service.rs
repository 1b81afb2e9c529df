use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, EncodingKey, Header as JwtHeader};
use tracing::{info, instrument};

use super::domain::{AuthSession, Claims, LoginInput};
use super::errors::AuthError;
use super::password::verify_password;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self { jwt_secret: c.jwt_secret.clone(), token_ttl_hours: c.token_ttl_hours }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Authenticate a customer and issue a signed token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = MockAuthRepository::default().with_customer(1, "Jane", "u@e.com", "Passw0rd").unwrap();
    /// let svc = AuthService::new(Arc::new(repo), AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 1 });
    /// let input = LoginInput { email: Some("u@e.com".into()), password: Some("Passw0rd".into()) };
    /// let session = tokio_test::block_on(svc.login(input)).unwrap();
    /// assert_eq!(session.customer.customer_id, 1);
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let email = input.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
            .ok_or_else(|| AuthError::Validation("email is required".into()))?;
        let password = input.password.as_deref().filter(|p| !p.is_empty())
            .ok_or_else(|| AuthError::Validation("password is required".into()))?;

        let cred = self.repo
            .find_credentials_by_email(email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if !verify_password(password, &cred.password_hash) {
            return Err(AuthError::Unauthorized);
        }

        let token = self.issue_token(cred.customer.customer_id, &cred.customer.email)?;
        info!(customer_id = cred.customer.customer_id, "customer_logged_in");
        Ok(AuthSession { customer: cred.customer, token })
    }

    fn issue_token(&self, customer_id: i32, email: &str) -> Result<String, AuthError> {
        let exp = TimeDelta::try_hours(self.cfg.token_ttl_hours)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .and_then(|at| usize::try_from(at.timestamp()).ok())
            .ok_or_else(|| AuthError::Token(format!("token_ttl_hours {} is out of range", self.cfg.token_ttl_hours)))?;
        let claims = Claims { sub: email.to_string(), cid: customer_id, exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::Token(e.to_string()))
    }
}

use std::sync::Arc;

use axum::{extract::{rejection::JsonRejection, State}, Json};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use service::auth::{domain::LoginInput, repo::SeaOrmAuthRepository, service::{AuthConfig, AuthService}};

use crate::errors::ApiError;

/// Shared state handed to non-generic handlers.
#[derive(Clone)]
pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
    pub auth: AuthConfig,
}

/// Non-POST methods on the login path; its trailing segment is not an id.
pub async fn login_method_fallback() -> ApiError {
    ApiError::InvalidId
}

/// `POST /api/customer/login`
pub async fn login(
    State(state): State<ServerState>,
    body: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let repo = Arc::new(SeaOrmAuthRepository { db: state.db.clone() });
    let svc = AuthService::new(repo, state.auth.clone());
    let session = svc.login(input).await?;
    Ok(Json(json!({
        "message": "Login successful",
        "token": session.token,
        "customer": session.customer,
    })))
}

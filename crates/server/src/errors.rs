use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// Failures a handler can return; rendered by a single `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid ID")]
    InvalidId,
    #[error("{0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("internal error: {0}")]
    Internal(String),
}

/// Wire shape of every error body.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ApiError> for JsonApiError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::InvalidId => Self { status: StatusCode::BAD_REQUEST, message: "Invalid ID".into(), error: None },
            ApiError::NotFound(m) => Self { status: StatusCode::NOT_FOUND, message: m, error: None },
            ApiError::Validation(detail) => {
                Self { status: StatusCode::BAD_REQUEST, message: "Validation Error".into(), error: Some(detail) }
            }
            ApiError::Unauthorized => {
                Self { status: StatusCode::UNAUTHORIZED, message: "Invalid credentials".into(), error: None }
            }
            ApiError::Internal(detail) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal Server Error".into(),
                error: Some(detail),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!(error = %detail, "request failed");
        }
        let body = JsonApiError::from(self);
        (body.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return ApiError::Validation(e.detail());
        }
        match e {
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            other => ApiError::Internal(other.detail()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(m) => ApiError::Validation(m),
            AuthError::Unauthorized => ApiError::Unauthorized,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self { ApiError::Internal(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_carries_detail() {
        let body = JsonApiError::from(ApiError::Validation("carModel is required".into()));
        assert_eq!(body.status, StatusCode::BAD_REQUEST);
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Validation Error", "error": "carModel is required"}));
    }

    #[test]
    fn not_found_body_has_no_error_field() {
        let v = serde_json::to_value(JsonApiError::from(ApiError::NotFound("Car not found".into()))).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Car not found"}));
    }

    #[test]
    fn service_errors_map_to_statuses() {
        let e: ApiError = ServiceError::not_found("Booking").into();
        assert!(matches!(e, ApiError::NotFound(ref m) if m == "Booking not found"));
        let e: ApiError = ServiceError::Db("fk violation".into()).into();
        assert!(matches!(e, ApiError::Internal(_)));
        let e: ApiError = ServiceError::Model(models::errors::ModelError::Validation("cost must be >= 0".into())).into();
        assert!(matches!(e, ApiError::Validation(ref m) if m == "cost must be >= 0"));
        let e: ApiError = AuthError::Unauthorized.into();
        assert!(matches!(e, ApiError::Unauthorized));
    }
}

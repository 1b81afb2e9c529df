use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Message carried by the variant, without the display prefix.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Validation(m)
            | ServiceError::NotFound(m)
            | ServiceError::Db(m)
            | ServiceError::Internal(m) => m.clone(),
            ServiceError::Model(models::errors::ModelError::Validation(m)) => m.clone(),
        }
    }

    /// Model-level validation failures are client errors as well.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn model_rule_violations_surface_as_validation() {
        let err: ServiceError = ModelError::Validation("cost must be >= 0".into()).into();
        assert!(err.is_validation());
        assert_eq!(err.detail(), "cost must be >= 0");
    }

    #[test]
    fn store_errors_are_not_client_errors() {
        let err = ServiceError::from(DbErr::Custom("boom".into()));
        assert!(!err.is_validation());
        assert!(err.detail().contains("boom"));
    }
}

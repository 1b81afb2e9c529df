use thiserror::Error;

/// Raised by the per-column checks next to each entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A field value violates a column or cross-column rule.
    #[error("invalid field value: {0}")]
    Validation(String),
}

use thiserror::Error;

/// Failures of the customer login flow.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login rejected: {0}")]
    Validation(String),
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("invalid credentials")]
    Unauthorized,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("token signing failed: {0}")]
    Token(String),
    #[error("credential lookup failed: {0}")]
    Repository(String),
}

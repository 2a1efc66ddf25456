use thiserror::Error;

/// Failure reported by an external collaborator (account service, etc.)
///
/// This layer does not classify failures further; the value travels unchanged
/// to the error tracker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Invalid secret key.")]
    InvalidSecretKey,
    #[error("An account with this key already exists.")]
    DuplicateAccount,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Other(String),
}

impl ServiceError {
    pub fn other(message: impl Into<String>) -> Self {
        ServiceError::Other(message.into())
    }
}

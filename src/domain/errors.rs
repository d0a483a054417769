use thiserror::Error;

// Failure reported by a provider adapter.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    // The provider answered and refused the operation.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    // The provider could not be reached or answered with something unreadable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

// Domain-level errors for auth workflows.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to create user")]
    UserNotCreated,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("{0}")]
    Unavailable(String),
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected { message, .. } => AuthError::Rejected(message),
            unavailable @ ProviderError::Unavailable(_) => {
                AuthError::Unavailable(unavailable.to_string())
            }
        }
    }
}

// Domain-level errors for the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    QueryFailed(String),
    #[error("malformed product row: {0}")]
    MalformedRow(String),
    #[error("{0}")]
    Unavailable(String),
}

impl From<ProviderError> for CatalogError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected { message, .. } => CatalogError::QueryFailed(message),
            unavailable @ ProviderError::Unavailable(_) => {
                CatalogError::Unavailable(unavailable.to_string())
            }
        }
    }
}

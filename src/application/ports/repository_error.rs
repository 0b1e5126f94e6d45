use thiserror::Error;

use crate::domain::errors::DomainError;

/// Failure of a single store operation.
///
/// Connection loss, constraint violations, bad SQL and timeouts all arrive
/// as `Database`; this layer does not tell them apart.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        RepositoryError::InvalidValue(err.to_string())
    }
}

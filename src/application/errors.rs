//! Error type shared by the use cases
//!
//! Every backend failure surfaces as `Repository`; an empty result is never
//! an error and comes back as `Ok(None)` or an empty list instead.

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{NewUser, User};
use crate::domain::value_objects::UserId;
#[cfg(test)]
use mockall::automock;

/// Port for user persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact match on email, as compared by the backend
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Insert and return the stored row, including the generated id
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
}

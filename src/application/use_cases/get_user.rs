use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::errors::UseCaseError;
use crate::application::ports::UserRepository;
use crate::domain::entities::User;
use crate::domain::value_objects::UserId;

/// Use case: Look up a single user
pub struct GetUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// `Ok(None)` when no user has this email
    #[instrument(skip(self))]
    pub async fn by_email(&self, email: &str) -> Result<Option<User>, UseCaseError> {
        let user = self.user_repo.find_by_email(email).await?;
        debug!(found = user.is_some(), "User lookup by email");
        Ok(user)
    }

    /// `Ok(None)` when no user has this id
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: UserId) -> Result<Option<User>, UseCaseError> {
        let user = self.user_repo.find_by_id(id).await?;
        debug!(found = user.is_some(), "User lookup by id");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockUserRepository, RepositoryError};
    use mockall::predicate::eq;

    fn create_test_user() -> User {
        User {
            id: UserId::new(1),
            name: "Eva Stanley".to_string(),
            email: "sebastianguerra@ymail.com".to_string(),
            password: "password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_user_by_email_found() {
        // Arrange
        let mut mock_user_repo = MockUserRepository::new();
        let user = create_test_user();
        mock_user_repo
            .expect_find_by_email()
            .with(eq("sebastianguerra@ymail.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let use_case = GetUserUseCase::new(Arc::new(mock_user_repo));

        // Act
        let result = use_case.by_email("sebastianguerra@ymail.com").await;

        // Assert
        let user = result.unwrap().expect("user should be found");
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "Eva Stanley");
    }

    #[tokio::test]
    async fn test_get_user_by_email_missing_is_none_not_error() {
        let mut mock_user_repo = MockUserRepository::new();
        mock_user_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let use_case = GetUserUseCase::new(Arc::new(mock_user_repo));

        let result = use_case.by_email("nobody@example.com").await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_get_user_by_email_backend_failure_is_error() {
        let mut mock_user_repo = MockUserRepository::new();
        mock_user_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let use_case = GetUserUseCase::new(Arc::new(mock_user_repo));

        let result = use_case.by_email("someone@example.com").await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let mut mock_user_repo = MockUserRepository::new();
        let user = create_test_user();
        mock_user_repo
            .expect_find_by_id()
            .with(eq(UserId::new(1)))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        mock_user_repo
            .expect_find_by_id()
            .with(eq(UserId::new(2)))
            .times(1)
            .returning(|_| Ok(None));

        let use_case = GetUserUseCase::new(Arc::new(mock_user_repo));

        assert!(use_case.by_id(UserId::new(1)).await.unwrap().is_some());
        assert!(use_case.by_id(UserId::new(2)).await.unwrap().is_none());
    }
}

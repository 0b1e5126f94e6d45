use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::errors::UseCaseError;
use crate::application::ports::UserRepository;
use crate::domain::entities::{NewUser, User};

/// Use case: Register a user
pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Insert the user and return the stored row with its generated id
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn execute(&self, user: NewUser) -> Result<User, UseCaseError> {
        let created = self.user_repo.create(&user).await?;
        info!(user_id = %created.id, "User created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockUserRepository, RepositoryError};
    use crate::domain::value_objects::UserId;

    #[tokio::test]
    async fn test_create_user_returns_generated_id() {
        // Arrange
        let mut mock_user_repo = MockUserRepository::new();
        mock_user_repo
            .expect_create()
            .times(1)
            .withf(|user| user.email == "allisonjackson@mail.com")
            .returning(|user| {
                Ok(User {
                    id: UserId::new(1001),
                    name: user.name.clone(),
                    email: user.email.clone(),
                    password: user.password.clone(),
                })
            });

        let use_case = CreateUserUseCase::new(Arc::new(mock_user_repo));

        // Act
        let result = use_case
            .execute(NewUser::new(
                "Dominic Parks",
                "allisonjackson@mail.com",
                "password",
            ))
            .await;

        // Assert
        let user = result.unwrap();
        assert_eq!(user.id, UserId::new(1001));
        assert_eq!(user.name, "Dominic Parks");
        assert_eq!(user.password, "password");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_surfaces_error() {
        let mut mock_user_repo = MockUserRepository::new();
        mock_user_repo.expect_create().times(1).returning(|_| {
            Err(RepositoryError::Database(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint".to_string(),
            )))
        });

        let use_case = CreateUserUseCase::new(Arc::new(mock_user_repo));

        let err = use_case
            .execute(NewUser::new("Dup", "dup@example.com", "pw"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("duplicate key"));
    }
}

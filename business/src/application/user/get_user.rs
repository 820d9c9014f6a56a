use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_user::GetUserUseCase;

pub struct GetUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserUseCase for GetUserUseCaseImpl {
    async fn execute(&self) -> Result<User, UserError> {
        self.logger.debug("Fetching user profile");
        let name = self.repository.get_name().await?;
        let age = self.repository.get_age().await?;
        Ok(User::new(name, age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_name(&self) -> Result<String, RepositoryError>;
            async fn get_age(&self) -> Result<u32, RepositoryError>;
            async fn get_user(&self) -> Result<User, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_compose_user_from_name_and_age() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_name()
            .returning(|| Ok("Emmanuel Villavicencio".to_string()));
        mock_repo.expect_get_age().returning(|| Ok(24));
        mock_repo.expect_get_user().never();

        let use_case = GetUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case.execute().await.unwrap();

        assert_eq!(user, User::new("Emmanuel Villavicencio", 24));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_name()
            .returning(|| Err(RepositoryError::Unavailable));

        let use_case = GetUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), UserError::Repository(_)));
    }
}

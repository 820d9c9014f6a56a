use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

/// User query service backed by a single immutable record.
pub struct UserRepositoryStatic {
    user: User,
}

impl UserRepositoryStatic {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

impl Default for UserRepositoryStatic {
    fn default() -> Self {
        Self::new(User::new("Emmanuel Villavicencio", 24))
    }
}

#[async_trait]
impl UserRepository for UserRepositoryStatic {
    async fn get_name(&self) -> Result<String, RepositoryError> {
        Ok(self.user.name.clone())
    }

    async fn get_age(&self) -> Result<u32, RepositoryError> {
        Ok(self.user.age)
    }

    async fn get_user(&self) -> Result<User, RepositoryError> {
        Ok(User::new(self.get_name().await?, self.get_age().await?))
    }
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_name(&self) -> Result<String, RepositoryError>;
    async fn get_age(&self) -> Result<u32, RepositoryError>;
    async fn get_user(&self) -> Result<User, RepositoryError>;
}

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self) -> Result<User, UserError>;
}

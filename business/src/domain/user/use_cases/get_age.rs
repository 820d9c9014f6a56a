use async_trait::async_trait;

use crate::domain::user::errors::UserError;

#[async_trait]
pub trait GetAgeUseCase: Send + Sync {
    async fn execute(&self) -> Result<u32, UserError>;
}

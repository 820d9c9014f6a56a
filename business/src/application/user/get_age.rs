use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_age::GetAgeUseCase;

pub struct GetAgeUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAgeUseCase for GetAgeUseCaseImpl {
    async fn execute(&self) -> Result<u32, UserError> {
        self.logger.debug("Fetching user age");
        Ok(self.repository.get_age().await?)
    }
}

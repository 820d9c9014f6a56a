use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

#[derive(Debug, Clone)]
pub struct GetProductsByCategoryParams {
    pub category: String,
}

#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError>;
}

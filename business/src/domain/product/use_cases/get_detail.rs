use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone)]
pub struct GetProductDetailParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductDetailParams,
    ) -> Result<Option<Product>, ProductError>;
}

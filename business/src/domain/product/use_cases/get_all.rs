use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductList;

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProductList, ProductError>;
}

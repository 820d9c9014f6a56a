use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

#[derive(Debug, Clone)]
pub struct SearchProductsParams {
    pub query: String,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError>;
}

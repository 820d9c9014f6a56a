use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};

pub struct GetProductDetailUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductDetailParams,
    ) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching product detail: {}", params.id));

        let product = self.repository.get_by_id(&params.id).await?;

        if product.is_none() {
            self.logger
                .debug(&format!("No product with id {}", params.id));
        }

        Ok(product)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductList;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetProductsUseCase;

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self) -> Result<ProductList, ProductError> {
        self.logger.info("Fetching product list");
        let list = self.repository.list_paged().await?;
        self.logger
            .info(&format!("Found {} products", list.total));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn search(&self, query: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn list_paged(&self) -> Result<ProductList, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn tablet() -> Product {
        Product::new(NewProductProps {
            id: ProductId::new("4"),
            name: "iPad Air".to_string(),
            description: "Tablet versátil para trabajo y entretenimiento".to_string(),
            category: "Tablets".to_string(),
            price: 599.99,
            image_url: "https://example.com/ipad.png".to_string(),
            in_stock: true,
            rating: 4.5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_paged_list_when_requested() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_paged()
            .times(1)
            .returning(|| Ok(ProductList::single_page(vec![tablet()])));

        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case.execute().await.unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.current_page, 1);
        assert_eq!(list.products[0].name, "iPad Air");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_paged()
            .returning(|| Err(RepositoryError::Unavailable));

        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        ));
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductList};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use crate::catalog::CatalogStore;

/// Product query service over an in-memory [`CatalogStore`]. Stateless apart
/// from the shared store handle; never fails.
pub struct ProductRepositoryInMemory {
    store: Arc<CatalogStore>,
}

impl ProductRepositoryInMemory {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.store
            .products()
            .iter()
            .filter(|&p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.store.products().to_vec())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.store.products().iter().find(|p| &p.id == id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| p.matches_category(category)))
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| p.matches_query(query)))
    }

    async fn list_paged(&self) -> Result<ProductList, RepositoryError> {
        let products = self.list_all().await?;
        Ok(ProductList::single_page(products))
    }
}

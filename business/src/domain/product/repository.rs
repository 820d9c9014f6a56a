use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, ProductList};

/// Read-only query port over the product catalog.
///
/// Absence is `Ok(None)`, never an error. `Err` is reserved for backends
/// that can actually fail.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn search(&self, query: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn list_paged(&self) -> Result<ProductList, RepositoryError>;
}

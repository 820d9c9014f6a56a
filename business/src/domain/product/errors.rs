#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("repository.failure")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

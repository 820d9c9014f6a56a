#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("repository.failure")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// The in-memory adapters never produce these; they exist for backends that
/// can fail (remote catalog, corrupted snapshot).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.corrupted")]
    Corrupted,
}

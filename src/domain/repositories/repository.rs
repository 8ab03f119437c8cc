use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The storage layer rejected a duplicate value on a unique index.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("persistence failure: {0}")]
    Persistence(String),
}

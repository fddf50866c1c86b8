//! Infrastructure error model.

use carrental_core::DomainError;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure of a repository operation.
///
/// ## Error Categories
///
/// - **Domain**: a stored row no longer satisfies the model (e.g. an unknown
///   transmission type) or a lookup resolved to nothing the caller can use
/// - **MissingReference**: a car ad row points at a category or manufacturer
///   row that does not exist
/// - **Storage**: the backing store itself failed (poisoned lock)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{table} row {id} does not exist")]
    MissingReference { table: &'static str, id: String },

    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub(crate) fn poisoned() -> Self {
        Self::Storage("in-memory store lock poisoned".to_string())
    }
}

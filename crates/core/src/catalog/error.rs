use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors raised while turning request parameters into a catalog query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid {field}: {value:?} is not a number")]
    InvalidPrice { field: &'static str, value: String },
}

/// Errors that can occur while listing the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

//! Pure functions for mapping repository and catalog errors to HTTP status codes.
//!
//! Follows the Functional Core pattern - no side effects, no HTTP types.

use super::RepositoryError;
use crate::catalog::CatalogError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use threadbare_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Item",
///     id: "999".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// Bad query parameters are the client's fault (400); storage failures
/// defer to [`repository_error_to_status_code`].
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::Query(_) => 400,
        CatalogError::Repository(e) => repository_error_to_status_code(e),
    }
}

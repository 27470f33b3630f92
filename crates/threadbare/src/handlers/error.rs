use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use threadbare_core::catalog::CatalogError;
use threadbare_core::storage::{
    catalog_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

/// Error type for the JSON API handlers.
///
/// The status code comes from the wrapped domain error when there is one.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(catalog_error) = self.0.downcast_ref::<CatalogError>() {
            catalog_error_to_status_code(catalog_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = %status_code, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threadbare_core::catalog::QueryError;

    #[test]
    fn test_query_error_is_bad_request() {
        let error = AppError::from(CatalogError::from(QueryError::InvalidPrice {
            field: "min_price",
            value: "abc".to_string(),
        }));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_errors_keep_their_status() {
        let not_found = AppError::from(RepositoryError::NotFound {
            entity_type: "Item",
            id: "7".to_string(),
        });
        let unavailable = AppError::from(CatalogError::from(RepositoryError::ConnectionFailed(
            "gone".to_string(),
        )));

        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

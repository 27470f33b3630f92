//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `threadbare_core::storage`.

use threadbare_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - Column conversion failures → `RepositoryError::Serialization`
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            RepositoryError::Serialization(err.to_string())
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "Item", "");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_no_rows_maps_to_not_found_with_id() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err, "Item", "999");

        assert_eq!(
            result,
            RepositoryError::NotFound {
                entity_type: "Item",
                id: "999".to_string(),
            }
        );
    }

    #[test]
    fn test_conversion_failure_maps_to_serialization() {
        let inner = std::io::Error::other("bad date");
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::FromSqlConversionFailure(
            7,
            rusqlite::types::Type::Text,
            Box::new(inner),
        ));

        let result = map_tokio_rusqlite_error(err, "Item", "1");

        assert!(matches!(result, RepositoryError::Serialization(_)));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Item", "");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Item", "");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}

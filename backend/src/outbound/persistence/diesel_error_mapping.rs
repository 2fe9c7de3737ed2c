//! Shared Diesel-to-port error mapping.

use tracing::debug;

use crate::domain::ports::PersistenceError;

use super::pool::PoolError;

/// Map pool errors to port connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> PersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PersistenceError::connection(message)
        }
    }
}

/// Map common Diesel error variants to port errors, emitting debug context
/// for diagnostics.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> PersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => PersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => PersistenceError::query("database error"),
        _ => PersistenceError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_connection_failures() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, PersistenceError::connection("timed out"));
    }

    #[test]
    fn not_found_maps_to_query_failure() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(mapped, PersistenceError::query("record not found"));
    }
}

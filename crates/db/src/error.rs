use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;

/// Error type returned by the cascade coordinator and the capacity guard.
///
/// Domain failures keep their typed context from [`CoreError`]; anything
/// from the driver (connection loss, serialization failure, statement
/// errors) rolls up into [`StoreError::Db`] and aborts the surrounding
/// transaction.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error("transaction aborted: {0}")]
    Db(#[from] sqlx::Error),
}

/// Convenience type alias for coordinator and guard results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Shorthand for the most common domain failure.
pub fn not_found(entity: &'static str, id: DbId) -> StoreError {
    StoreError::Domain(CoreError::NotFound { entity, id })
}

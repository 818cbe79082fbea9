use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gymdesk_core::error::CoreError;
use gymdesk_db::error::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for coordinator/guard failures and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the cascade coordinator or capacity guard.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A database error from sqlx outside the coordinator/guard paths.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(StoreError::Domain(core)) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::CapacityOutOfRange { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                // The message carries the rejected value and the offending
                // booking count, which is what the client shows the user.
                CoreError::CapacityConflict { .. } => (
                    StatusCode::BAD_REQUEST,
                    "CAPACITY_CONFLICT",
                    core.to_string(),
                ),
                CoreError::ConcurrentModification { .. } => {
                    (StatusCode::CONFLICT, "CONFLICT", core.to_string())
                }
            },

            AppError::Store(StoreError::Db(err)) => {
                tracing::error!(error = %err, "Transaction aborted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamecoll_core::error::CoreError;

/// Body sent with every 500 response. The underlying error is only logged.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Body sent with every 404 response.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the storage and template
/// failures a handler can hit. Implements [`IntoResponse`] to produce a fixed
/// plain-text body; the error text itself goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gamecoll_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template could not be loaded or rendered.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status for this error.
    ///
    /// Only "not found" is distinguished; malformed input is reported as a
    /// server error like every other failure.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. })
            | AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::NOT_FOUND {
            tracing::info!(error = %self, "Not found");
            return (status, NOT_FOUND_BODY).into_response();
        }

        match &self {
            AppError::Template(err) => {
                tracing::error!(error = %err, detail = ?err.detail(), "Template error")
            }
            other => tracing::error!(error = %other, "Request failed"),
        }
        (status, INTERNAL_ERROR_BODY).into_response()
    }
}

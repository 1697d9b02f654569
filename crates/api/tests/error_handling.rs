//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and fixed plain-text body. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use gamecoll_api::error::{AppError, INTERNAL_ERROR_BODY, NOT_FOUND_BODY};
use gamecoll_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and body text.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Game",
        id: 42,
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, NOT_FOUND_BODY);
}

// ---------------------------------------------------------------------------
// Test: invalid input maps to 500 without echoing the input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_returns_500_and_hides_message() {
    let err = AppError::Core(CoreError::InvalidInput("game \"abc\" is not an id".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, INTERNAL_ERROR_BODY);
}

// ---------------------------------------------------------------------------
// Test: database errors map to 500, except RowNotFound
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500() {
    let (status, body) = error_to_response(AppError::Database(sqlx::Error::PoolClosed)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, body) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}

// ---------------------------------------------------------------------------
// Test: template errors map to 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn template_error_returns_500() {
    let err = AppError::Template(minijinja::Error::new(
        minijinja::ErrorKind::SyntaxError,
        "unexpected end of input",
    ));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, INTERNAL_ERROR_BODY);
}

//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Only the status code is part of the contract; the `{"error": ...}` body is
/// informational.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("validation failed: {0}")]
  Validation(String),

  /// The request body could not be read as the expected JSON envelope.
  #[error("invalid body: {0}")]
  Body(#[from] JsonRejection),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend failure, logging it before it is flattened into a 500.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    tracing::error!(error = %e, "store operation failed");
    ApiError::Store(Box::new(e))
  }
}

impl From<todo_core::Error> for ApiError {
  fn from(e: todo_core::Error) -> Self { ApiError::Validation(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::Body(r) => (r.status(), r.body_text()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// Parse a primary key from a path segment.
///
/// A segment that is not an integer cannot name an existing row, so it is
/// reported the same way as a missing one.
pub(crate) fn parse_id(raw: &str, kind: &str) -> Result<i64, ApiError> {
  raw
    .parse()
    .map_err(|_| ApiError::NotFound(format!("{kind} {raw} not found")))
}

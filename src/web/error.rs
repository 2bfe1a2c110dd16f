//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;

/// Errors returned by API handlers, rendered as `{"detail": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request parameters failed validation
    #[error("{0}")]
    Validation(String),

    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// A handler failed unexpectedly
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("API error ({}): {}", status, self);
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Render a handler panic as an `Internal` error
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "internal server error".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    ApiError::Internal(detail).into_response()
}

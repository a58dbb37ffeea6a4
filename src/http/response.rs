//! Error responses.
//!
//! Domain failures map to their own status and `{error}` body; anything
//! else becomes a 500 with the generic `{error, message}` body.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::users::UserError;

/// Generic message for unexpected failures.
pub const INTERNAL_ERROR: &str = "Something went wrong!";

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Name and email are required")]
    InvalidInput,

    #[error("User not found")]
    NotFound,

    #[error("Cannot {method} {path}")]
    NoRoute { method: String, path: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::NoRoute { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidInput => ApiError::InvalidInput,
            UserError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Unhandled error");
                json!({ "error": INTERNAL_ERROR, "message": message })
            }
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Convert a handler panic into the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(message).into_response()
}

//! Typed error handling for request processing
//!
//! Handlers produce exactly two kinds of failure: a missing record
//! (`NotFound`, HTTP 404) and a rejected payload (`Validation`, HTTP 400).
//! Validation is first-failure-wins: the message carried here is the message
//! of the first rule that rejected, never an aggregate.
//!
//! The HTTP rendering is part of the API contract: every error body is
//! `{"error": "<message>"}` with the literal message text.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// Error type returned by all resource handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Requested identifier absent from the relevant store
    NotFound {
        /// Resource noun as it appears in messages ("Dish", "Order")
        resource: &'static str,
        id: String,
    },

    /// Malformed or rule-violating input
    Validation(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { resource, id } => {
                write!(f, "{} id not found: {}", resource, id)
            }
            ApiError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

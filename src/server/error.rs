//! HTTP-facing errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LancetError;

/// Message returned when the request carries no text.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The `text` field is missing, null or empty.
    #[error("No text provided")]
    MissingText,

    /// The body could not be read as the expected JSON payload.
    #[error("{0}")]
    InvalidPayload(String),

    /// Analysis failed unexpectedly.
    #[error("Internal server error")]
    Internal(#[from] LancetError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingText | ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!("Request failed: {cause}");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

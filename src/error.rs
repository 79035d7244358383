//! # Centralized Error Handling
//!
//! Every failure a handler can produce is an [`AppError`], which knows its
//! HTTP status. Clients always receive a plain-text message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::RegistryError;
use crate::services::newsletter::NewsletterError;

/// Central application error type.
///
/// _Internal errors are logged here; not-found conditions are logged where they are detected._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("newsletter delivery failed")]
    Newsletter(#[from] NewsletterError),
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Newsletter(e) => {
                error!(error = %e, "Newsletter transport failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send newsletter").into_response()
            }
        }
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;

//! Maps generation errors to structured HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use fikcja_generate::GenerationError;

/// Application-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request parameters failed validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// A required backing resource (the bank-code table) is unavailable.
    #[error("service unavailable: {0}")]
    Unavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidParams(_)
            | GenerationError::UnknownGenerator(_)
            | GenerationError::Number(_)
            | GenerationError::PrefixNotFound(_) => AppError::Validation(err.to_string()),
            GenerationError::NoBankCodes | GenerationError::BankData(_) => {
                AppError::Unavailable(err.to_string())
            }
            GenerationError::Io(_) | GenerationError::Csv(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}

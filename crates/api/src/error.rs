use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use movies_core::error::CoreError;
use movies_core::types::Timestamp;
use movies_core::validation::FieldViolation;
use serde::Serialize;

/// Message returned for any failure whose details must not leak.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform [`ErrorResponse`] envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Input the boundary could not parse (body, query or path).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Uniform error envelope: `{status, message, timestamp, errors?}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: Timestamp,
    /// Field violations, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: Utc::now(),
            errors: None,
        }
    }
}

impl AppError {
    /// Translate this error into a status code and envelope.
    ///
    /// Internal failures are logged here and replaced by a generic message.
    pub fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        let status = match self {
            AppError::Core(core) if core.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Repository(err)) => {
                tracing::error!(error = %err, "Repository error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Core(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = match self {
            AppError::Core(CoreError::Validation(violations)) => ErrorResponse {
                errors: Some(violations.clone()),
                ..ErrorResponse::new(status, self.to_string())
            },
            AppError::Core(core) if core.is_not_found() => {
                ErrorResponse::new(status, core.to_string())
            }
            AppError::BadRequest(msg) => ErrorResponse::new(status, msg.clone()),
            AppError::Core(_) | AppError::InternalError(_) => {
                ErrorResponse::new(status, INTERNAL_MESSAGE)
            }
        };

        (status, body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_error_response();
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

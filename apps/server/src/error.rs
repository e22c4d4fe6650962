use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use positions_core::errors::{Error as CoreError, ValidationError};
use positions_core::import::ImportError;
use positions_core::positions::PositionError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Position(PositionError::NotFound(msg)) => ApiError::NotFound(msg),
            CoreError::Position(PositionError::InvalidData(msg)) => ApiError::BadRequest(msg),
            CoreError::Validation(ValidationError::InvalidInput(msg)) => ApiError::BadRequest(msg),
            CoreError::Validation(v) => ApiError::BadRequest(v.to_string()),
            CoreError::Import(ImportError::SourceNotFound(path)) => {
                ApiError::BadRequest(format!("Source file not found: {}", path))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

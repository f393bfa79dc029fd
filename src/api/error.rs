//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::CompareError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Model service unavailable: {0}")]
    ModelUnavailable(String),
    #[error("Model returned an unusable response: {0}")]
    ModelResponse(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CompareError> for ApiError {
    fn from(e: CompareError) -> Self {
        match e {
            CompareError::Connection(_) | CompareError::Api { .. } | CompareError::HttpClient(_) => {
                ApiError::ModelUnavailable(e.to_string())
            }
            CompareError::MalformedResponse(_) | CompareError::EmptyResponse => {
                ApiError::ModelResponse(e.to_string())
            }
            CompareError::MissingApiKey => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::ModelUnavailable(detail) => {
                tracing::warn!(detail, "Model endpoint unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_UNAVAILABLE",
                    "Comparison model is unreachable".to_string(),
                )
            }
            ApiError::ModelResponse(detail) => {
                tracing::warn!(detail, "Model response rejected");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_RESPONSE_INVALID",
                    "Comparison model returned an unusable response".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

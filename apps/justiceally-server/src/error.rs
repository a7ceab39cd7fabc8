//! Error types for the JusticeAlly server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use justiceally_core::PipelineError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0}")]
    ComingSoon(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("{0}")]
    ExtractionFailed(String),

    #[error("Enhancement failed: {0}")]
    EnhancementFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("A request is already in progress")]
    Busy,
}

impl From<PipelineError> for ServerError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Validation(fields) => ServerError::MissingFields(fields),
            PipelineError::Extraction(e) => ServerError::ExtractionFailed(e.to_string()),
            PipelineError::Enhancement(e) => ServerError::EnhancementFailed(e.to_string()),
            PipelineError::ComingSoon(id) => ServerError::ComingSoon(format!(
                "{} documents will be available soon",
                id.display_name()
            )),
            PipelineError::EmptyInput => {
                ServerError::InvalidRequest("No text provided".to_string())
            }
            PipelineError::Busy => ServerError::Busy,
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<String>>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ServerError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                "MISSING_FIELDS",
                format!("Please fill in all required fields: {}", fields.join(", ")),
                Some(fields),
            ),
            ServerError::ComingSoon(msg) => (StatusCode::NOT_FOUND, "COMING_SOON", msg, None),
            ServerError::InvalidUpload(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "INVALID_UPLOAD",
                msg,
                None,
            ),
            ServerError::ExtractionFailed(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                msg,
                None,
            ),
            ServerError::EnhancementFailed(msg) => (
                StatusCode::BAD_GATEWAY,
                "ENHANCEMENT_FAILED",
                msg,
                None,
            ),
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg, None)
            }
            ServerError::Busy => (
                StatusCode::CONFLICT,
                "REQUEST_IN_FLIGHT",
                "A request is already in progress".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}

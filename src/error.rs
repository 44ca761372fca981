use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the stylization pipeline itself, independent of any
/// transport. Maps onto the taxonomy of spec §7.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("kernel invariant violated: {0}")]
    Processing(String),

    #[error("PNG encode error: {0}")]
    Encode(String),
}

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Pipeline(PipelineError::Decode(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Pipeline(e @ PipelineError::Processing(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Pipeline(e @ PipelineError::Encode(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let error = match status {
            StatusCode::BAD_REQUEST => "bad_request",
            _ => "processing_error",
        };

        let body = Json(json!({
            "error": error,
            "details": details,
        }));

        (status, body).into_response()
    }
}

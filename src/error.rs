use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Custom error type for the application.
///
/// Bodies are plain text, not JSON: callers treat the success body as agent
/// JSON, and an error payload must not look like something to parse.
#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed,
    InvalidRequest(serde_json::Error),
    EncodeRequest(serde_json::Error),
    AgentUnreachable(reqwest::Error),
    AgentReadBody(reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Only POST allowed"),
            AppError::InvalidRequest(cause) => {
                warn!("Rejecting undecodable request body: {}", cause);
                (StatusCode::BAD_REQUEST, "Invalid request")
            }
            AppError::EncodeRequest(cause) => {
                error!("Failed to encode agent request: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to encode request",
                )
            }
            AppError::AgentUnreachable(cause) => {
                error!("Failed to contact agent: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to contact agent")
            }
            AppError::AgentReadBody(cause) => {
                error!("Failed to read agent response: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read agent response",
                )
            }
        };

        (status, message).into_response()
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;

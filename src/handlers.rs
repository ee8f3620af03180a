use axum::body::Bytes;
use axum::http::header;
use axum::response::{IntoResponse, Json as ResponseJson, Response};
use axum::Extension;
use tracing::{debug, info};

use crate::agent::AgentClient;
use crate::error::{AppError, AppResult};
use crate::models::{HealthResponse, QueryRequest};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Forwarding handler for the query endpoint.
///
/// Decodes the inbound body, re-serializes it for the agent, and relays the
/// agent's status and body back to the caller byte-for-byte. The body is
/// taken raw rather than through the `Json` extractor so that a decode
/// failure maps to the endpoint's own 400 response.
pub async fn forward_query(
    Extension(agent): Extension<AgentClient>,
    body: Bytes,
) -> AppResult<Response> {
    info!("Query endpoint called ({} bytes)", body.len());

    let request: QueryRequest = serde_json::from_slice(&body).map_err(AppError::InvalidRequest)?;
    info!("Forwarding query: {}", request.query);

    let payload = serde_json::to_vec(&request).map_err(AppError::EncodeRequest)?;

    let reply = agent.dispatch(payload).await?;
    info!("Relaying {} bytes back to client", reply.body.len());

    Ok((
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response())
}

/// Fallback for unsupported methods on the query route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

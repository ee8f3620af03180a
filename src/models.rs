use serde::{Deserialize, Serialize};

/// Request payload for the query endpoint.
///
/// `query` is the only recognized field; anything else the client sends is
/// dropped during decoding.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Shape of the downstream agent's reply. The forwarder relays the reply as
/// opaque bytes and never decodes it; this type documents the contract and
/// is used by tests.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponse {
    pub response: String,
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}

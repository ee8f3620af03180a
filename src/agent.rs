use axum::body::Bytes;
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;

/// Client for the downstream RAG agent.
///
/// Wraps a single pooled `reqwest::Client`; cloning is cheap and the handle
/// is shared across all handler tasks.
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: reqwest::Client,
    agent_url: String,
}

/// Reply from the agent: the status plus the undecoded body bytes.
#[derive(Debug)]
pub struct AgentReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl AgentClient {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.agent_timeout)
            .build()?;

        Ok(Self {
            client,
            agent_url: config.agent_url.clone(),
        })
    }

    /// POST the already-serialized query payload to the agent and return its
    /// reply untouched.
    pub async fn dispatch(&self, payload: Vec<u8>) -> Result<AgentReply, AppError> {
        debug!("Dispatching query to agent at {}", self.agent_url);

        let response = self
            .client
            .post(&self.agent_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(AppError::AgentUnreachable)?;

        let status = response.status();
        info!("Agent responded with status {}", status);

        let body = response.bytes().await.map_err(AppError::AgentReadBody)?;
        Ok(AgentReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(agent_url: String) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            agent_url,
            cors_origin: "*".to_string(),
            agent_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_json_and_returns_reply_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"query": "hi"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"response":"hello"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let agent = AgentClient::new(&test_config(format!("{}/query", server.uri()))).unwrap();
        let reply = agent.dispatch(br#"{"query":"hi"}"#.to_vec()).await.unwrap();

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(&reply.body[..], br#"{"response":"hello"}"#);
    }

    #[tokio::test]
    async fn test_dispatch_returns_non_2xx_status_without_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let agent = AgentClient::new(&test_config(format!("{}/query", server.uri()))).unwrap();
        let reply = agent.dispatch(br#"{"query":"hi"}"#.to_vec()).await.unwrap();

        assert_eq!(reply.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(&reply.body[..], b"overloaded");
    }

    #[tokio::test]
    async fn test_dispatch_unreachable_agent() {
        // Grab a port nothing is listening on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let agent =
            AgentClient::new(&test_config(format!("http://127.0.0.1:{port}/query"))).unwrap();
        let result = agent.dispatch(br#"{"query":"hi"}"#.to_vec()).await;

        assert!(matches!(result, Err(AppError::AgentUnreachable(_))));
    }

    #[tokio::test]
    async fn test_dispatch_times_out_on_hung_agent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let mut config = test_config(format!("{}/query", server.uri()));
        config.agent_timeout = Duration::from_millis(100);

        let agent = AgentClient::new(&config).unwrap();
        let result = agent.dispatch(br#"{"query":"hi"}"#.to_vec()).await;

        assert!(matches!(result, Err(AppError::AgentUnreachable(_))));
    }
}

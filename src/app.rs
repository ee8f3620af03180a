use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::agent::AgentClient;
use crate::config::Config;
use crate::routes::create_routes;

/// Largest request body the forwarder will buffer.
const MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rs_rag_fwd=info,tower_http=debug,axum::rejection=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the CORS layer from the configured origin: `*` keeps the open
/// wildcard, anything else is returned as an exact value.
fn cors_layer(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let layer = if config.cors_origin == "*" {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(config.cors_origin.parse::<HeaderValue>()?)
    };

    Ok(layer)
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    let agent = AgentClient::new(config)?;

    Ok(create_routes()
        .layer(Extension(agent)) // Shared agent client with pooled connections
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_create_app_rejects_malformed_origin() {
        let config = Config {
            listen_addr: "127.0.0.1:0".to_string(),
            agent_url: "http://localhost:8000/query".to_string(),
            cors_origin: "bad\norigin".to_string(),
            agent_timeout: Duration::from_secs(30),
        };

        assert!(create_app(&config).is_err());
    }
}

use crate::handlers::{forward_query, health_check, method_not_allowed};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/query", post(forward_query).fallback(method_not_allowed))
}

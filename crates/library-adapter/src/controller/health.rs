use axum::{routing::get, Router};

/// Health check
pub async fn health_handler() -> &'static str {
    "healthy"
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_handler))
}

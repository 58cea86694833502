use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    info!(
        event_name = "api.health.request",
        correlation_id = "health",
        endpoint = "/health",
        "health check requested"
    );

    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

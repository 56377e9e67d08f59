use crate::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

pub const GREETING: &str = "Hello, World, I'm alive!";

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub profile: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub fn greeting_routes() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Plain text greeting (source profile only)", body = String, content_type = "text/plain")
    )
)]
pub async fn greeting() -> &'static str {
    GREETING
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "nodesource-api".to_string(),
        profile: state.profile.to_string(),
    })
}

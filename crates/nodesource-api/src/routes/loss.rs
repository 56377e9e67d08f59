use axum::{Json, Router, extract::State, routing::post};

use crate::AppState;

// Request bodies are never read, so any payload (or none) is accepted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/is_never_negative", post(is_never_negative))
        .route("/calculate", post(calculate))
}

#[utoipa::path(
    post,
    path = "/is_never_negative",
    responses(
        (status = 200, description = "Always true", body = bool)
    ),
    tag = "loss"
)]
pub async fn is_never_negative(State(state): State<AppState>) -> Json<bool> {
    Json(state.service.is_never_negative())
}

#[utoipa::path(
    post,
    path = "/calculate",
    responses(
        (status = 200, description = "Always the literal 1.0", body = String, content_type = "text/plain")
    ),
    tag = "loss"
)]
pub async fn calculate(State(state): State<AppState>) -> String {
    state.service.calculate_loss()
}

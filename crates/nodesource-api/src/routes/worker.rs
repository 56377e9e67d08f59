use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use nodesource_core::NodeValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// API representation of a forecast entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NodeValueDto {
    /// Worker label, `Worker1` to `Worker3`
    pub worker: String,
    /// Decimal value as text
    pub value: String,
}

impl From<NodeValue> for NodeValueDto {
    fn from(value: NodeValue) -> Self {
        Self {
            worker: value.worker,
            value: value.value,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inference/{token}", get(inference))
        .route("/forecast", get(forecast))
}

/// Placeholder inference for a token
#[utoipa::path(
    get,
    path = "/inference/{token}",
    params(
        ("token" = String, Path, description = "Token symbol (ignored)")
    ),
    responses(
        (status = 200, description = "Decimal value in [0.0, 100.0)", body = String, content_type = "text/plain")
    ),
    tag = "worker"
)]
pub async fn inference(State(state): State<AppState>, Path(token): Path<String>) -> String {
    state.service.inference(&token)
}

/// Placeholder forecast from three workers
#[utoipa::path(
    get,
    path = "/forecast",
    responses(
        (status = 200, description = "Forecast entries for Worker1..Worker3", body = Vec<NodeValueDto>)
    ),
    tag = "worker"
)]
pub async fn forecast(State(state): State<AppState>) -> Json<Vec<NodeValueDto>> {
    Json(
        state
            .service
            .forecast()
            .into_iter()
            .map(NodeValueDto::from)
            .collect(),
    )
}
